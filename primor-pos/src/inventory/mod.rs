//! Inventory stock tracker
//!
//! Ingredient stock levels, decremented by the order lifecycle when an order
//! is delivered and corrected manually through admin adjustment. Stock is
//! allowed to go negative: over-commitment is an observable low/negative
//! state for the alert views, not an error that blocks fulfillment.

mod seed;

use rust_decimal::prelude::*;
use shared::models::Ingredient;

use crate::core::{AppError, AppResult};
use crate::money::to_decimal;

/// In-memory ingredient stock
#[derive(Debug, Default)]
pub struct Inventory {
    ingredients: Vec<Ingredient>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory populated with the startup stock levels
    pub fn seeded() -> Self {
        Self {
            ingredients: seed::ingredients(),
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Unconditional decrement, no floor at zero.
    ///
    /// Unknown ingredient references are skipped with a warning; recipes may
    /// outlive admin edits and a stale reference must not fail the order.
    pub fn deduct(&mut self, ingredient_id: &str, amount: f64) {
        match self.ingredients.iter_mut().find(|i| i.id == ingredient_id) {
            Some(ing) => {
                let next = to_decimal(ing.current_stock) - to_decimal(amount);
                ing.current_stock = next.to_f64().unwrap_or_default();
                if ing.current_stock < 0.0 {
                    tracing::warn!(
                        ingredient_id = %ingredient_id,
                        stock = ing.current_stock,
                        "Ingredient over-committed, stock negative"
                    );
                } else if ing.is_low() {
                    tracing::warn!(
                        ingredient_id = %ingredient_id,
                        stock = ing.current_stock,
                        min_stock = ing.min_stock,
                        "Ingredient at or below minimum stock"
                    );
                }
            }
            None => {
                tracing::warn!(
                    ingredient_id = %ingredient_id,
                    "Stock deduction against unknown ingredient, skipped"
                );
            }
        }
    }

    /// Manual admin adjustment, outside the order lifecycle. `delta` may be
    /// negative. Returns the new stock level.
    pub fn adjust(&mut self, ingredient_id: &str, delta: f64) -> AppResult<f64> {
        let ing = self
            .ingredients
            .iter_mut()
            .find(|i| i.id == ingredient_id)
            .ok_or_else(|| AppError::NotFound(format!("ingredient {ingredient_id}")))?;
        let next = to_decimal(ing.current_stock) + to_decimal(delta);
        ing.current_stock = next.to_f64().unwrap_or_default();
        tracing::info!(
            ingredient_id = %ingredient_id,
            delta = delta,
            stock = ing.current_stock,
            "Stock adjusted"
        );
        Ok(ing.current_stock)
    }

    /// Ingredients at or below their minimum threshold
    pub fn low_stock(&self) -> Vec<&Ingredient> {
        self.ingredients.iter().filter(|i| i.is_low()).collect()
    }
}
