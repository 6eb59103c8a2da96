//! User Model

use serde::{Deserialize, Serialize};

/// Terminal role, selects which surface the process drives
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Cashier,
    Kitchen,
    Customer,
}

/// User entity
///
/// Accounts are hardcoded demo data; credential checking is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    pub name: String,
}
