//! Shared Domain Types
//!
//! Value objects shared across the ordering context.

pub mod address;
pub mod identifiers;
pub mod timestamp;

pub use address::Address;
pub use identifiers::{DeliveryId, MemberId, OrderId};
pub use timestamp::Timestamp;
