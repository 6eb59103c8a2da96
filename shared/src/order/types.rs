//! Order snapshot types and the status transition table

use crate::models::ComplementItem;
use serde::{Deserialize, Serialize};

/// Order status
///
/// The happy path is strictly forward, one step at a time:
/// RECEIVED -> PREPARING -> READY -> DELIVERED. CANCELLED is reachable from
/// any non-terminal status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Received,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Terminal statuses accept no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// The single forward successor on the happy path
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Received => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Transition table: forward one step, or cancel from any non-terminal
    /// status. No skipping, no going backward.
    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        if to == OrderStatus::Cancelled {
            return true;
        }
        self.next() == Some(to)
    }
}

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Pix,
    CreditCard,
    DebitCard,
    Cash,
}

/// Fulfillment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentType {
    #[default]
    Delivery,
    Pickup,
    DineIn,
}

/// Selected complements for one group: group-name snapshot plus the chosen
/// items, copied at order time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedComplement {
    pub group_name: String,
    pub items: Vec<ComplementItem>,
}

/// Order item: an immutable snapshot of product data at order time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product reference (String ID, weak)
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    /// Per-unit price including selected complements
    pub unit_price: f64,
    /// unit_price × quantity
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_complements: Option<Vec<SelectedComplement>>,
}

/// Order entity
///
/// Owned exclusively by the order store. Invariants: `total == subtotal + tax`
/// at creation; `updated_at` strictly increases on every status change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Human-facing sequential number
    pub order_number: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    /// Always zero in this system, kept for receipt layout parity
    pub tax: f64,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub fulfillment: FulfillmentType,
    /// UTC milliseconds
    pub created_at: i64,
    /// UTC milliseconds
    pub updated_at: i64,
}
