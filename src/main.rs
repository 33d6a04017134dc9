use portfolio_rebalancer_tui::app::{App, Portfolio};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let portfolio = Portfolio::new();

    let mut app = App::new(portfolio);
    app.run()?;

    Ok(())
}
