//! Eager-Aggregating Loader
//!
//! Retrieves order roots and their to-one associations (member, delivery)
//! in a single combined query. Exactly one query per call regardless of
//! result-set size; traversal after return costs nothing.
//!
//! Limitation, not a bug: only to-one associations may be aggregated.
//! Joining an unbounded to-many collection (order items, say) duplicates
//! result rows and invalidates root pagination; that needs pagination at
//! the root before the join, or a separate batched secondary fetch.

use std::sync::Arc;

use crate::application::ports::{EntityStorePort, OrderSearch, ReadScope};
use crate::domain::ordering::{AssociationKind, FetchError, Order};

/// Loader that aggregates member and delivery in one query.
pub struct EagerAggregatingLoader<S: EntityStorePort> {
    store: Arc<S>,
}

impl<S: EntityStorePort> EagerAggregatingLoader<S> {
    /// Create a new `EagerAggregatingLoader`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch order roots with member and delivery fully resident.
    ///
    /// # Errors
    ///
    /// `NotFound` if any returned order references a missing member or
    /// delivery (data-integrity fault, surfaced with the dangling id).
    pub async fn fetch_all_with_member_and_delivery(
        &self,
        scope: &ReadScope,
        search: &OrderSearch,
    ) -> Result<Vec<Order>, FetchError> {
        let orders = self
            .store
            .find_orders_with_member_and_delivery(scope, search)
            .await?;
        tracing::debug!(rows = orders.len(), "eager loader fetched aggregated orders");

        for order in &orders {
            if !order.member().is_loaded() {
                tracing::warn!(
                    order_id = %order.id(),
                    member_id = %order.member_id(),
                    "aggregated fetch found a dangling member reference"
                );
                return Err(FetchError::NotFound {
                    kind: AssociationKind::Member,
                    id: order.member_id().to_string(),
                });
            }
            if !order.delivery().is_loaded() {
                tracing::warn!(
                    order_id = %order.id(),
                    delivery_id = %order.delivery_id(),
                    "aggregated fetch found a dangling delivery reference"
                );
                return Err(FetchError::NotFound {
                    kind: AssociationKind::Delivery,
                    id: order.delivery_id().to_string(),
                });
            }
        }
        Ok(orders)
    }
}
