pub mod app;
pub mod models;

#[cfg(test)]
mod test;
