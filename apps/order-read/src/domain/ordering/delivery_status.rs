//! Delivery status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    /// Delivery prepared, not yet shipped.
    Ready,
    /// Delivery handed to the carrier.
    Shipped,
    /// Delivery arrived.
    Completed,
}

impl DeliveryStatus {
    /// Returns true if the delivery can still be redirected.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "READY"),
            Self::Shipped => write!(f, "SHIPPED"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}
