use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn parse_positive_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    let value = parse_decimal(field, field_name)?;
    if value <= Decimal::ZERO {
        bail!("Expected {} to be greater than zero, got '{}'", field_name, value);
    }
    Ok(value)
}
