//! Admin backoffice - aggregates, stock control, catalog management

use shared::models::{ComplementGroupCreate, Ingredient, ProductCreate};

use crate::core::{AppResult, AppState};
use crate::orders::{SalesSummary, summarize};

#[derive(Debug, Default)]
pub struct AdminSurface;

impl AdminSurface {
    pub fn new() -> Self {
        Self
    }

    /// Revenue / order count / average ticket over the whole store
    pub fn sales_summary(&self, state: &AppState) -> SalesSummary {
        summarize(state.orders.orders())
    }

    /// Ingredients at or below their minimum threshold
    pub fn low_stock<'a>(&self, state: &'a AppState) -> Vec<&'a Ingredient> {
        state.inventory.low_stock()
    }

    pub fn low_stock_count(&self, state: &AppState) -> usize {
        state.inventory.low_stock().len()
    }

    /// Manual stock correction, outside the order lifecycle. Returns the new
    /// level.
    pub fn adjust_stock(
        &self,
        state: &mut AppState,
        ingredient_id: &str,
        delta: f64,
    ) -> AppResult<f64> {
        state.inventory.adjust(ingredient_id, delta)
    }

    pub fn create_product(&self, state: &mut AppState, payload: ProductCreate) -> AppResult<String> {
        state.catalog.create_product(payload)
    }

    pub fn delete_product(&self, state: &mut AppState, product_id: &str) -> AppResult<()> {
        state.catalog.delete_product(product_id)
    }

    pub fn create_group(
        &self,
        state: &mut AppState,
        payload: ComplementGroupCreate,
    ) -> AppResult<String> {
        state.catalog.create_group(payload)
    }

    pub fn delete_group(&self, state: &mut AppState, group_id: &str) -> AppResult<()> {
        state.catalog.delete_group(group_id)
    }
}
