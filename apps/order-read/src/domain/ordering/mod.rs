//! Ordering Bounded Context
//!
//! The order read graph: order -> member and order -> delivery -> address,
//! with explicit association residency and the errors the fetching
//! strategies surface.

pub mod association;
pub mod delivery;
pub mod delivery_status;
pub mod errors;
pub mod member;
pub mod order;
pub mod order_status;

pub use association::{Association, AssociationKind};
pub use delivery::Delivery;
pub use delivery_status::DeliveryStatus;
pub use errors::FetchError;
pub use member::Member;
pub use order::Order;
pub use order_status::{OrderStatus, ParseOrderStatusError};
