//! Ingredient Model

use serde::{Deserialize, Serialize};

/// Stock unit of measure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockUnit {
    /// Mass in kilograms
    Kg,
    /// Count of pieces
    Un,
    /// Volume in liters
    Lt,
}

/// Ingredient entity
///
/// Seeded at startup; mutated only by stock deduction or manual admin
/// adjustment, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit: StockUnit,
    /// Current stock in `unit`; may go negative under over-commitment
    pub current_stock: f64,
    /// Alert threshold for the low-stock views
    pub min_stock: f64,
    /// Cost per unit in currency
    pub cost_price: f64,
}

impl Ingredient {
    /// Low-stock check used by the admin alert views
    pub fn is_low(&self) -> bool {
        self.current_stock <= self.min_stock
    }
}
