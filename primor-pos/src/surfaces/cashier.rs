//! Cashier terminal - counter sales
//!
//! The cashier names the customer and picks the payment method; counter
//! orders are dine-in.

use shared::order::{FulfillmentType, PaymentMethod};

use crate::cart::{Cart, CartError, ComplementSelection};
use crate::core::{AppError, AppResult, AppState};

#[derive(Debug, Default)]
pub struct CashierSurface {
    cart: Cart,
}

impl CashierSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    pub fn add_to_order(
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

    pub fn remove_from_order(&mut self, product_id: &str) {
        self.cart.remove_one(product_id);
    }

    /// Finalize the sale. An empty cart is a validation failure the cashier
    /// corrects by adding items. Returns the new order ID.
    pub fn finalize_sale(
        &mut self,
        state: &mut AppState,
        customer_name: &str,
        payment_method: PaymentMethod,
    ) -> AppResult<String> {
        let order_number = state.orders.next_order_number();
        let order = self
            .cart
            .checkout(
                order_number,
                customer_name,
                payment_method,
                FulfillmentType::DineIn,
            )
            .map_err(AppError::from)?;
        let id = order.id.clone();
        state.orders.append(order)?;
        Ok(id)
    }
}
