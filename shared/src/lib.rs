//! Shared types for the Primor POS workspace
//!
//! Data models and order types used by every surface of the terminal:
//! catalog entities (products, complement groups), inventory ingredients,
//! system users, and the order/status types consumed by the lifecycle
//! engine. Pure data; business services live in `primor-pos`.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
