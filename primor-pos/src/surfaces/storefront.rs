//! Storefront - customer-facing catalog browser and checkout
//!
//! Web orders carry fixed defaults: PIX payment, delivery fulfillment,
//! "Cliente Digital" as the customer.

use shared::order::{FulfillmentType, PaymentMethod};

use crate::cart::{Cart, CartError, ComplementSelection};
use crate::core::{AppError, AppResult, AppState};

#[derive(Debug, Default)]
pub struct StorefrontSurface {
    cart: Cart,
}

impl StorefrontSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    /// Add one unit; products with complement groups require satisfied
    /// selections
    pub fn add_to_cart(
        &mut self,
        state: &AppState,
        product_id: &str,
        selection: &ComplementSelection,
    ) -> Result<(), CartError> {
        let product = state
            .catalog
            .product(product_id)
            .ok_or_else(|| CartError::ProductNotFound(product_id.to_string()))?;
        self.cart.add_item(product, &state.catalog, selection)
    }

    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove_one(product_id);
    }

    /// Submit the cart as a web order. Returns the new order ID.
    pub fn checkout(&mut self, state: &mut AppState) -> AppResult<String> {
        let order_number = state.orders.next_order_number();
        let order = self
            .cart
            .checkout(
                order_number,
                "Cliente Digital",
                PaymentMethod::Pix,
                FulfillmentType::Delivery,
            )
            .map_err(AppError::from)?;
        let id = order.id.clone();
        state.orders.append(order)?;
        Ok(id)
    }
}
