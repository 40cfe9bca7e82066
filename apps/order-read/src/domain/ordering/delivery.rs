//! Delivery entity.

use super::delivery_status::DeliveryStatus;
use crate::domain::shared::{Address, DeliveryId};

/// A delivery attached to exactly one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    id: DeliveryId,
    address: Address,
    status: DeliveryStatus,
}

impl Delivery {
    /// Create a new delivery.
    #[must_use]
    pub const fn new(id: DeliveryId, address: Address, status: DeliveryStatus) -> Self {
        Self {
            id,
            address,
            status,
        }
    }

    /// Delivery identifier.
    #[must_use]
    pub const fn id(&self) -> &DeliveryId {
        &self.id
    }

    /// Shipping address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Delivery status.
    #[must_use]
    pub const fn status(&self) -> DeliveryStatus {
        self.status
    }
}
