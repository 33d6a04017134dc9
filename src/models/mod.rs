pub mod position;
pub mod rebalance;

pub use position::{Position, PositionUpdate};
pub use rebalance::RebalanceResult;
