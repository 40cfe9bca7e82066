//! View Assembler
//!
//! Pure mapping from whichever shape a strategy produced into the one
//! externally visible [`OrderView`]. No I/O, no side effects; output is
//! field-for-field identical regardless of the producing strategy, which
//! is the invariant that keeps the strategies interchangeable.

use crate::application::dto::{OrderSummary, OrderView};
use crate::domain::ordering::{AssociationKind, FetchError, Order};

/// Map one fully loaded order into its view.
///
/// # Errors
///
/// `NotLoaded` if either association was never fetched; assembling never
/// triggers a query on its own.
pub fn to_view(order: &Order) -> Result<OrderView, FetchError> {
    let member = order.member().get().ok_or_else(|| FetchError::NotLoaded {
        kind: AssociationKind::Member,
        order_id: order.id().to_string(),
    })?;
    let delivery = order.delivery().get().ok_or_else(|| FetchError::NotLoaded {
        kind: AssociationKind::Delivery,
        order_id: order.id().to_string(),
    })?;

    Ok(OrderView {
        order_id: order.id().clone(),
        member_name: member.name().to_string(),
        order_date: order.order_date(),
        status: order.status(),
        delivery_address: delivery.address().clone(),
    })
}

/// Map a batch of fully loaded orders, preserving emission order.
///
/// # Errors
///
/// Fails on the first order with an unfetched association.
pub fn to_views(orders: &[Order]) -> Result<Vec<OrderView>, FetchError> {
    orders.iter().map(to_view).collect()
}

/// Map projection summaries into views (identity mapping per row).
#[must_use]
pub fn from_summaries(summaries: Vec<OrderSummary>) -> Vec<OrderView> {
    summaries.into_iter().map(OrderView::from).collect()
}
