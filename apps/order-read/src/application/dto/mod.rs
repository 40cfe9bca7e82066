//! Data transfer objects for the read-path output boundary.

mod order_summary;
mod order_view;

pub use order_summary::OrderSummary;
pub use order_view::OrderView;
