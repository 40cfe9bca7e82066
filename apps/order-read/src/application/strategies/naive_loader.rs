//! Naive Graph Loader
//!
//! Fetches order roots only; association residency is resolved on demand,
//! one secondary query per order per association (the N+1 shape). Cost is
//! 1 + 2N queries for N orders when both associations are resolved, and
//! exactly 1 when none are. Prefer the eager loader or the projection
//! repository when N is large or traversal is guaranteed.

use std::sync::Arc;

use crate::application::ports::{EntityStorePort, OrderSearch, ReadScope};
use crate::domain::ordering::{AssociationKind, Delivery, FetchError, Member, Order};

/// Loader that retrieves order roots and resolves associations lazily.
pub struct NaiveGraphLoader<S: EntityStorePort> {
    store: Arc<S>,
}

impl<S: EntityStorePort> NaiveGraphLoader<S> {
    /// Create a new `NaiveGraphLoader`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch order roots matching the filter. One query; both
    /// associations come back `NotLoaded`.
    pub async fn fetch_all(
        &self,
        scope: &ReadScope,
        search: &OrderSearch,
    ) -> Result<Vec<Order>, FetchError> {
        let orders = self.store.find_orders(scope, search).await?;
        tracing::debug!(rows = orders.len(), "naive loader fetched order roots");
        Ok(orders)
    }

    /// Resolve both associations of one order with on-demand secondary
    /// queries (two per order when neither is resident yet).
    ///
    /// # Errors
    ///
    /// `StaleResultAccess` if the read scope has already closed,
    /// `NotFound` if a referenced member or delivery does not exist.
    pub async fn resolve_associations(
        &self,
        scope: &ReadScope,
        order: &mut Order,
    ) -> Result<(), FetchError> {
        if !order.member().is_loaded() {
            let member = self.secondary_fetch_member(scope, order).await?;
            order.attach_member(member);
        }
        if !order.delivery().is_loaded() {
            let delivery = self.secondary_fetch_delivery(scope, order).await?;
            order.attach_delivery(delivery);
        }
        Ok(())
    }

    async fn secondary_fetch_member(
        &self,
        scope: &ReadScope,
        order: &Order,
    ) -> Result<Member, FetchError> {
        Self::guard_scope(scope, AssociationKind::Member, order)?;
        let found = self.store.find_member(scope, order.member_id()).await?;
        found.ok_or_else(|| {
            tracing::warn!(
                order_id = %order.id(),
                member_id = %order.member_id(),
                "order references a missing member"
            );
            FetchError::NotFound {
                kind: AssociationKind::Member,
                id: order.member_id().to_string(),
            }
        })
    }

    async fn secondary_fetch_delivery(
        &self,
        scope: &ReadScope,
        order: &Order,
    ) -> Result<Delivery, FetchError> {
        Self::guard_scope(scope, AssociationKind::Delivery, order)?;
        let found = self.store.find_delivery(scope, order.delivery_id()).await?;
        found.ok_or_else(|| {
            tracing::warn!(
                order_id = %order.id(),
                delivery_id = %order.delivery_id(),
                "order references a missing delivery"
            );
            FetchError::NotFound {
                kind: AssociationKind::Delivery,
                id: order.delivery_id().to_string(),
            }
        })
    }

    fn guard_scope(
        scope: &ReadScope,
        kind: AssociationKind,
        order: &Order,
    ) -> Result<(), FetchError> {
        if scope.is_open() {
            Ok(())
        } else {
            Err(FetchError::StaleResultAccess {
                kind,
                order_id: order.id().to_string(),
            })
        }
    }
}
