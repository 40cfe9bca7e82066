//! Order summary projection shape.

use serde::{Deserialize, Serialize};

use crate::domain::ordering::OrderStatus;
use crate::domain::shared::{Address, OrderId, Timestamp};

/// Flat result of the order-summary projection query.
///
/// Closed value: there is nothing left to traverse and no way to load
/// more. Single-purpose by design; a view needing different fields needs
/// its own projection query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
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
