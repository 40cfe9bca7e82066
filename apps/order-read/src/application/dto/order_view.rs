//! Order view output DTO.

use serde::{Deserialize, Serialize};

use super::order_summary::OrderSummary;
use crate::domain::ordering::OrderStatus;
use crate::domain::shared::{Address, OrderId, Timestamp};

/// The externally visible shape of one order.
///
/// Read-only and request-scoped; never persisted. Every fetching
/// strategy funnels into this one shape, which is what keeps the
/// strategies interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderView {
    /// Order identifier.
    pub order_id: OrderId,
    /// Owning member's name.
    pub member_name: String,
    /// When the order was placed.
    pub order_date: Timestamp,
    /// Order status.
    pub status: OrderStatus,
    /// Delivery shipping address.
    pub delivery_address: Address,
}

impl From<OrderSummary> for OrderView {
    /// Identity mapping: the projection already carries exactly the
    /// view's fields.
    fn from(summary: OrderSummary) -> Self {
        Self {
            order_id: summary.order_id,
            member_name: summary.member_name,
            order_date: summary.order_date,
            status: summary.status,
            delivery_address: summary.delivery_address,
        }
    }
}
