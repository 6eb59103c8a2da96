//! Order store
//!
//! Most-recent-first collection of submitted orders. Orders are never removed
//! and their items never change; only `status` and `updated_at` are written
//! in place by the lifecycle engine.

use chrono::Utc;
use shared::order::{Order, OrderStatus};

use crate::core::{AppError, AppResult};

/// Authoritative order collection
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
    order_count: u64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All orders, most recent first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }

    /// Next human-facing order number from the store-owned sequence:
    /// `PED<yyyymmdd><counter>`
    pub fn next_order_number(&mut self) -> String {
        self.order_count += 1;
        let date_str = Utc::now().format("%Y%m%d").to_string();
        format!("PED{}{}", date_str, 1000 + self.order_count)
    }

    /// Insert at the head (most-recent-first). Duplicate IDs are rejected:
    /// with snowflake IDs a collision indicates a bug upstream, not user
    /// error.
    pub fn append(&mut self, order: Order) -> AppResult<()> {
        if self.get(&order.id).is_some() {
            return Err(AppError::Conflict(format!("order {}", order.id)));
        }
        tracing::info!(
            order_id = %order.id,
            order_number = %order.order_number,
            total = order.total,
            "Order submitted"
        );
        self.orders.insert(0, order);
        Ok(())
    }

    /// Orders still on the kitchen board (non-terminal statuses)
    pub fn active(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|o| !o.status.is_terminal())
    }

    pub fn with_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{FulfillmentType, PaymentMethod};
    use shared::util::now_millis;

    fn order(id: &str, total: f64) -> Order {
        let now = now_millis();
        Order {
            id: id.to_string(),
            order_number: "PED1".to_string(),
            customer_name: "Maria".to_string(),
            items: Vec::new(),
            subtotal: total,
            tax: 0.0,
            total,
            status: OrderStatus::Received,
            payment_method: PaymentMethod::Cash,
            fulfillment: FulfillmentType::DineIn,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn append_inserts_most_recent_first() {
        let mut store = OrderStore::new();
        store.append(order("o1", 10.0)).unwrap();
        store.append(order("o2", 20.0)).unwrap();
        let ids: Vec<&str> = store.orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o2", "o1"]);
    }

    #[test]
    fn append_rejects_duplicate_id() {
        let mut store = OrderStore::new();
        store.append(order("o1", 10.0)).unwrap();
        assert!(matches!(
            store.append(order("o1", 20.0)),
            Err(AppError::Conflict(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn order_numbers_are_sequential() {
        let mut store = OrderStore::new();
        let a = store.next_order_number();
        let b = store.next_order_number();
        assert!(a.starts_with("PED"));
        assert_ne!(a, b);
        // counter part strictly increases
        let na: u64 = a[11..].parse().unwrap();
        let nb: u64 = b[11..].parse().unwrap();
        assert_eq!(nb, na + 1);
    }

    #[test]
    fn active_excludes_terminal_statuses() {
        let mut store = OrderStore::new();
        store.append(order("o1", 10.0)).unwrap();
        store.append(order("o2", 20.0)).unwrap();
        store.get_mut("o1").unwrap().status = OrderStatus::Delivered;

        let active: Vec<&str> = store.active().map(|o| o.id.as_str()).collect();
        assert_eq!(active, vec!["o2"]);
    }
}
