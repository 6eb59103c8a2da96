//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product category (fixed menu sections)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Fritos,
    Assados,
    Combos,
    Bebidas,
    Sobremesas,
}

/// Ingredient consumption per unit sold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeEntry {
    /// Ingredient reference (String ID)
    pub ingredient_id: String,
    /// Quantity consumed per product unit, in the ingredient's stock unit
    pub quantity: f64,
}

/// Product entity
///
/// Orders snapshot name/price at creation time; deleting a product does not
/// cascade to orders that already reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Base price in currency unit (before complements)
    pub price: f64,
    pub category: ProductCategory,
    pub image: String,
    pub recipe: Vec<RecipeEntry>,
    /// Complement group references (String IDs, weak)
    #[serde(default)]
    pub complement_group_ids: Vec<String>,
    /// Descriptive combo content labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo_items: Option<Vec<String>>,
}

impl Product {
    /// Products with complement groups require selections before they can be
    /// added to a cart
    pub fn has_complements(&self) -> bool {
        !self.complement_group_ids.is_empty()
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: ProductCategory,
    pub image: Option<String>,
    #[serde(default)]
    pub recipe: Vec<RecipeEntry>,
    #[serde(default)]
    pub complement_group_ids: Vec<String>,
    pub combo_items: Option<Vec<String>>,
}
