//! Role surfaces
//!
//! One controller per terminal role, selected once at the composition root
//! from the logged-in user's role. Surfaces are thin views over the core
//! operations and return data for rendering; drawing, forms and charts are
//! collaborator concerns outside this crate.

mod admin;
mod cashier;
mod kitchen;
mod storefront;

pub use admin::AdminSurface;
pub use cashier::CashierSurface;
pub use kitchen::{KitchenBoard, KitchenSurface, Urgency, urgency};
pub use storefront::StorefrontSurface;

use shared::models::UserRole;

/// Tagged dispatch over the four roles
#[derive(Debug)]
pub enum Surface {
    Storefront(StorefrontSurface),
    Cashier(CashierSurface),
    Kitchen(KitchenSurface),
    Admin(AdminSurface),
}

impl Surface {
    /// Selected once at startup from the logged-in role
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Customer => Surface::Storefront(StorefrontSurface::new()),
            UserRole::Cashier => Surface::Cashier(CashierSurface::new()),
            UserRole::Kitchen => Surface::Kitchen(KitchenSurface::new()),
            UserRole::Admin => Surface::Admin(AdminSurface::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Surface::Storefront(_) => "storefront",
            Surface::Cashier(_) => "cashier",
            Surface::Kitchen(_) => "kitchen",
            Surface::Admin(_) => "admin",
        }
    }
}
