//! Order types
//!
//! The order snapshot model and its status machine. Orders copy product
//! name/price at creation time and never re-read the catalog afterwards;
//! after creation only `status` and `updated_at` change.

pub mod types;

// Re-exports
pub use types::*;
