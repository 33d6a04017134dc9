use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Position, RebalanceResult};

pub fn rebalance(positions: &[Position]) -> Vec<RebalanceResult> {
    if positions.is_empty() {
        return Vec::new();
    }

    let total_portfolio_value: Decimal = positions
        .iter()
        .map(|position| position.shares() * position.price())
        .sum();

    positions
        .iter()
        .map(|position| {
            let current_value = position.shares() * position.price();
            let target_value = total_portfolio_value * position.target_weight() / dec!(100);
            let difference = target_value - current_value;
            // A zero price is reachable through edits, so the division is checked.
            let trade_quantity = difference.checked_div(*position.price());

            RebalanceResult::new(
                position.clone(),
                current_value,
                target_value,
                difference,
                trade_quantity,
            )
        })
        .collect()
}
