//! Complement Group Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Complement option (embedded in ComplementGroup)
///
/// Immutable once created; owned by exactly one group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplementItem {
    pub id: String,
    pub name: String,
    /// Additive price in currency unit
    pub price: f64,
}

/// Complement group entity
///
/// A named set of add-on choices attached to products by ID (weak reference,
/// not ownership). Invariant, enforced at creation:
/// `0 <= min_choices <= max_choices <= items.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplementGroup {
    pub id: String,
    pub name: String,
    /// Minimum required selections before an item can be added to the cart
    pub min_choices: u32,
    /// Maximum allowed selections
    pub max_choices: u32,
    /// Embedded items, in display order
    pub items: Vec<ComplementItem>,
}

impl ComplementGroup {
    /// Single-choice groups replace the current selection instead of
    /// accumulating
    pub fn is_single_choice(&self) -> bool {
        self.max_choices == 1
    }
}

/// Create complement group payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComplementGroupCreate {
    #[validate(length(min = 1))]
    pub name: String,
    pub min_choices: u32,
    pub max_choices: u32,
    pub items: Vec<ComplementItem>,
}
