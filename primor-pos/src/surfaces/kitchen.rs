//! Kitchen display - production board and status advancement

use shared::order::{Order, OrderStatus};

use crate::core::AppState;
use crate::orders::{LifecycleError, set_order_status};

/// Board urgency thresholds, minutes since order creation
const WARN_AFTER_MIN: i64 = 10;
const LATE_AFTER_MIN: i64 = 15;

/// Age classification for an order card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Warning,
    Late,
}

/// Classify an order card by age at `now_ms`
pub fn urgency(order: &Order, now_ms: i64) -> Urgency {
    let age_min = (now_ms - order.created_at) / 60_000;
    if age_min > LATE_AFTER_MIN {
        Urgency::Late
    } else if age_min > WARN_AFTER_MIN {
        Urgency::Warning
    } else {
        Urgency::Normal
    }
}

/// Snapshot of the three production columns; terminal statuses are excluded
/// from the board
#[derive(Debug)]
pub struct KitchenBoard<'a> {
    pub received: Vec<&'a Order>,
    pub preparing: Vec<&'a Order>,
    pub ready: Vec<&'a Order>,
}

impl KitchenBoard<'_> {
    /// Column counts in display order
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.received.len(), self.preparing.len(), self.ready.len())
    }
}

#[derive(Debug, Default)]
pub struct KitchenSurface;

impl KitchenSurface {
    pub fn new() -> Self {
        Self
    }

    /// Active orders grouped by column
    pub fn board<'a>(&self, state: &'a AppState) -> KitchenBoard<'a> {
        KitchenBoard {
            received: state.orders.with_status(OrderStatus::Received).collect(),
            preparing: state.orders.with_status(OrderStatus::Preparing).collect(),
            ready: state.orders.with_status(OrderStatus::Ready).collect(),
        }
    }

    /// RECEIVED -> PREPARING
    pub fn begin_preparation(
        &self,
        state: &mut AppState,
        order_id: &str,
    ) -> Result<(), LifecycleError> {
        self.advance(state, order_id, OrderStatus::Preparing)
    }

    /// PREPARING -> READY
    pub fn mark_ready(&self, state: &mut AppState, order_id: &str) -> Result<(), LifecycleError> {
        self.advance(state, order_id, OrderStatus::Ready)
    }

    /// READY -> DELIVERED; deducts stock exactly once
    pub fn confirm_delivery(
        &self,
        state: &mut AppState,
        order_id: &str,
    ) -> Result<(), LifecycleError> {
        self.advance(state, order_id, OrderStatus::Delivered)
    }

    fn advance(
        &self,
        state: &mut AppState,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), LifecycleError> {
        let AppState {
            catalog,
            inventory,
            orders,
            ..
        } = state;
        set_order_status(orders, catalog, inventory, order_id, status)
    }
}
