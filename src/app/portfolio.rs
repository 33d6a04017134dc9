use anyhow::{Result, bail};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    app::{calc, utils::parse_positive_decimal},
    models::{Position, PositionUpdate, RebalanceResult},
};

#[derive(Clone, Debug, Default)]
pub struct Portfolio {
    positions: Vec<Position>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    pub fn positions(&self) -> &Vec<Position> {
        &self.positions
    }

    // Numeric fields arrive as free-form text from the input form and are
    // parsed and validated here; nothing is appended on failure.
    pub fn add(&mut self, name: &str, shares: &str, price: &str, target_weight: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Name must not be empty");
        }

        let shares = parse_positive_decimal(shares, "shares")?;
        let price = parse_positive_decimal(price, "price")?;
        let target_weight = parse_positive_decimal(target_weight, "target weight")?;

        self.positions.push(Position::new(
            Uuid::new_v4().to_string(),
            name.to_string(),
            shares,
            price,
            target_weight,
        ));

        Ok(())
    }

    pub fn update(&mut self, id: &str, update: PositionUpdate) {
        if let Some(position) = self.positions.iter_mut().find(|p| p.id() == id) {
            position.apply(update);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.positions.retain(|p| p.id() != id);
    }

    pub fn total_target_weight(&self) -> Decimal {
        self.positions.iter().map(|p| *p.target_weight()).sum()
    }

    pub fn rebalance(&self) -> Vec<RebalanceResult> {
        calc::rebalance(&self.positions)
    }
}
