//! Order lifecycle engine
//!
//! Validates status transitions and performs the single inventory side
//! effect: the first transition into DELIVERED deducts recipe stock. All
//! other transitions touch nothing but `status` and `updated_at`.

use shared::order::{Order, OrderStatus};
use shared::util::now_millis;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::inventory::Inventory;
use crate::money::stock_amount;
use crate::orders::store::OrderStore;

/// Lifecycle errors
#[derive(Debug, Error, PartialEq)]
pub enum LifecycleError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Invalid transition: {from:?} -> {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

/// Apply a status transition to a stored order.
///
/// Transitions are forward-only with no skipping; CANCELLED is reachable
/// from any non-terminal status; terminal statuses accept nothing further.
/// Every applied transition stamps `updated_at` strictly greater than the
/// previous value (clock ties between rapid updates resolve to `prev + 1`).
///
/// Side effect contract: transitioning into DELIVERED deducts stock for each
/// recipe entry of each item's product, `recipe.quantity × item.quantity`.
/// Because DELIVERED is terminal and re-entry is rejected, the deduction
/// runs at most once per order.
pub fn set_order_status(
    store: &mut OrderStore,
    catalog: &Catalog,
    inventory: &mut Inventory,
    order_id: &str,
    status: OrderStatus,
) -> Result<(), LifecycleError> {
    let Some(order) = store.get_mut(order_id) else {
        tracing::warn!(order_id = %order_id, "Status update against unknown order");
        return Err(LifecycleError::OrderNotFound(order_id.to_string()));
    };

    let from = order.status;
    if !from.can_transition_to(status) {
        return Err(LifecycleError::InvalidTransition { from, to: status });
    }

    if status == OrderStatus::Delivered && from != OrderStatus::Delivered {
        deduct_stock_for_order(order, catalog, inventory);
    }

    order.status = status;
    order.updated_at = now_millis().max(order.updated_at + 1);
    tracing::info!(
        order_id = %order_id,
        from = ?from,
        to = ?status,
        "Order status updated"
    );
    Ok(())
}

/// Deduct every recipe entry of every item. Items whose product was deleted
/// after ordering are skipped with a warning; the snapshot order remains
/// deliverable.
fn deduct_stock_for_order(order: &Order, catalog: &Catalog, inventory: &mut Inventory) {
    for item in &order.items {
        let Some(product) = catalog.product(&item.product_id) else {
            tracing::warn!(
                order_id = %order.id,
                product_id = %item.product_id,
                "Recipe lookup for missing product, stock not deducted"
            );
            continue;
        };
        for entry in &product.recipe {
            inventory.deduct(&entry.ingredient_id, stock_amount(entry.quantity, item.quantity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{FulfillmentType, OrderItem, PaymentMethod};

    /// Order with one item {p1 × 2 @ 8.50} against the seeded catalog
    /// (p1 recipe: i1 × 0.1, i2 × 0.05) and inventory (i1 = 50, i2 = 30)
    fn fixture() -> (OrderStore, Catalog, Inventory) {
        let catalog = Catalog::seeded();
        let inventory = Inventory::seeded();
        let mut store = OrderStore::new();

        let now = now_millis();
        let order = Order {
            id: "o1".to_string(),
            order_number: "PED1".to_string(),
            customer_name: "Maria".to_string(),
            items: vec![OrderItem {
                product_id: "p1".to_string(),
                name: "Coxinha Suprema".to_string(),
                quantity: 2,
                unit_price: 8.50,
                total_price: 17.0,
                selected_complements: None,
            }],
            subtotal: 17.0,
            tax: 0.0,
            total: 17.0,
            status: OrderStatus::Received,
            payment_method: PaymentMethod::Cash,
            fulfillment: FulfillmentType::DineIn,
            created_at: now,
            updated_at: now,
        };
        store.append(order).unwrap();
        (store, catalog, inventory)
    }

    fn advance(
        store: &mut OrderStore,
        catalog: &Catalog,
        inventory: &mut Inventory,
        status: OrderStatus,
    ) -> Result<(), LifecycleError> {
        set_order_status(store, catalog, inventory, "o1", status)
    }

    #[test]
    fn delivery_deducts_recipe_times_quantity() {
        let (mut store, catalog, mut inventory) = fixture();

        advance(&mut store, &catalog, &mut inventory, OrderStatus::Preparing).unwrap();
        advance(&mut store, &catalog, &mut inventory, OrderStatus::Ready).unwrap();
        assert_eq!(inventory.get("i1").unwrap().current_stock, 50.0);

        advance(&mut store, &catalog, &mut inventory, OrderStatus::Delivered).unwrap();
        assert_eq!(inventory.get("i1").unwrap().current_stock, 49.8);
        assert_eq!(inventory.get("i2").unwrap().current_stock, 29.9);
    }

    #[test]
    fn redelivery_is_rejected_and_never_double_deducts() {
        let (mut store, catalog, mut inventory) = fixture();
        advance(&mut store, &catalog, &mut inventory, OrderStatus::Preparing).unwrap();
        advance(&mut store, &catalog, &mut inventory, OrderStatus::Ready).unwrap();
        advance(&mut store, &catalog, &mut inventory, OrderStatus::Delivered).unwrap();

        let result = advance(&mut store, &catalog, &mut inventory, OrderStatus::Delivered);
        assert_eq!(
            result,
            Err(LifecycleError::InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Delivered,
            })
        );
        assert_eq!(inventory.get("i1").unwrap().current_stock, 49.8);
        assert_eq!(inventory.get("i2").unwrap().current_stock, 29.9);
    }

    #[test]
    fn skipping_and_backward_transitions_are_rejected() {
        let (mut store, catalog, mut inventory) = fixture();

        let skip = advance(&mut store, &catalog, &mut inventory, OrderStatus::Ready);
        assert!(matches!(skip, Err(LifecycleError::InvalidTransition { .. })));

        advance(&mut store, &catalog, &mut inventory, OrderStatus::Preparing).unwrap();
        let back = advance(&mut store, &catalog, &mut inventory, OrderStatus::Received);
        assert!(matches!(back, Err(LifecycleError::InvalidTransition { .. })));

        // no stock was touched by rejected transitions
        assert_eq!(inventory.get("i1").unwrap().current_stock, 50.0);
    }

    #[test]
    fn cancellation_reachable_from_any_non_terminal_without_deduction() {
        for target in [OrderStatus::Received, OrderStatus::Preparing, OrderStatus::Ready] {
            let (mut store, catalog, mut inventory) = fixture();
            if target != OrderStatus::Received {
                advance(&mut store, &catalog, &mut inventory, OrderStatus::Preparing).unwrap();
            }
            if target == OrderStatus::Ready {
                advance(&mut store, &catalog, &mut inventory, OrderStatus::Ready).unwrap();
            }
            advance(&mut store, &catalog, &mut inventory, OrderStatus::Cancelled).unwrap();
            assert_eq!(store.get("o1").unwrap().status, OrderStatus::Cancelled);
            assert_eq!(inventory.get("i1").unwrap().current_stock, 50.0);
        }
    }

    #[test]
    fn unknown_order_reports_not_found_and_changes_nothing() {
        let (mut store, catalog, mut inventory) = fixture();
        let result =
            set_order_status(&mut store, &catalog, &mut inventory, "ghost", OrderStatus::Preparing);
        assert_eq!(result, Err(LifecycleError::OrderNotFound("ghost".to_string())));
        assert_eq!(store.get("o1").unwrap().status, OrderStatus::Received);
    }

    #[test]
    fn updated_at_strictly_increases_across_the_happy_path() {
        let (mut store, catalog, mut inventory) = fixture();
        let mut last = store.get("o1").unwrap().updated_at;

        for status in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Delivered] {
            advance(&mut store, &catalog, &mut inventory, status).unwrap();
            let stamped = store.get("o1").unwrap().updated_at;
            assert!(stamped > last, "updated_at must strictly increase");
            last = stamped;
        }
    }

    #[test]
    fn deleted_product_skips_deduction_but_delivers() {
        let (mut store, mut catalog, mut inventory) = fixture();
        catalog.delete_product("p1").unwrap();

        advance(&mut store, &catalog, &mut inventory, OrderStatus::Preparing).unwrap();
        advance(&mut store, &catalog, &mut inventory, OrderStatus::Ready).unwrap();
        advance(&mut store, &catalog, &mut inventory, OrderStatus::Delivered).unwrap();

        assert_eq!(store.get("o1").unwrap().status, OrderStatus::Delivered);
        assert_eq!(inventory.get("i1").unwrap().current_stock, 50.0);
    }
}
