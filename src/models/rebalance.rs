use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::Position;

#[derive(Clone, Debug, Getters, new)]
pub struct RebalanceResult {
    position: Position,
    current_value: Decimal,
    target_value: Decimal,
    difference: Decimal,
    // None when the position's price is zero and no quantity can be derived.
    trade_quantity: Option<Decimal>,
}
