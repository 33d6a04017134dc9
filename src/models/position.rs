use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Position {
    id: String,
    name: String,
    shares: Decimal,
    price: Decimal,
    target_weight: Decimal,
}

impl Position {
    // Range checks happen at add time only; edits may hold out-of-range values.
    pub fn apply(&mut self, update: PositionUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(shares) = update.shares {
            self.shares = shares;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(target_weight) = update.target_weight {
            self.target_weight = target_weight;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PositionUpdate {
    pub name: Option<String>,
    pub shares: Option<Decimal>,
    pub price: Option<Decimal>,
    pub target_weight: Option<Decimal>,
}
