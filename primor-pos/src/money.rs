//! Money and quantity calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done using `Decimal` internally, then converted
//! to `f64` for storage/serialization. Stock quantities share the same
//! conversion helpers but are never rounded to currency precision.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total = unit price × quantity, rounded to currency precision
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Stock quantity consumed: per-unit recipe quantity × item quantity.
///
/// Not rounded: stock quantities are not currency.
pub fn stock_amount(per_unit: f64, quantity: i32) -> f64 {
    (to_decimal(per_unit) * Decimal::from(quantity))
        .to_f64()
        .unwrap_or_default()
}
