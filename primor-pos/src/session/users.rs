//! 系统用户表
//!
//! 演示用硬编码账号；口令校验不在本系统范围内。

use shared::models::{User, UserRole};

fn user(id: &str, username: &str, role: UserRole, name: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        role,
        name: name.to_string(),
    }
}

/// The fixed demo accounts
pub fn system_users() -> Vec<User> {
    vec![
        user("u1", "admin", UserRole::Admin, "Gerente Primor"),
        user("u2", "caixa1", UserRole::Cashier, "Operador 01"),
        user("u3", "cozinha1", UserRole::Kitchen, "Chef de Produção"),
    ]
}

/// Lookup by username
pub fn find(username: &str) -> Option<User> {
    system_users().into_iter().find(|u| u.username == username)
}
