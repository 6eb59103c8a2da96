//! Read-only sales aggregates for the admin dashboard

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::order::{Order, OrderStatus};

use crate::money::{to_decimal, to_f64};

/// Aggregate sales view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    /// Realized revenue
    pub revenue: f64,
    /// All submitted orders, regardless of status
    pub order_count: usize,
    /// revenue / order_count, 0 when there are no orders
    pub average_ticket: f64,
}

/// Summarize the order collection.
///
/// Revenue counts DELIVERED orders only: goods handed over are realized;
/// READY orders can still be cancelled and are excluded.
pub fn summarize(orders: &[Order]) -> SalesSummary {
    let revenue: Decimal = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .map(|o| to_decimal(o.total))
        .sum();
    let order_count = orders.len();
    let average_ticket = if order_count == 0 {
        Decimal::ZERO
    } else {
        revenue / Decimal::from(order_count as u64)
    };

    SalesSummary {
        revenue: to_f64(revenue),
        order_count,
        average_ticket: to_f64(average_ticket),
    }
}
