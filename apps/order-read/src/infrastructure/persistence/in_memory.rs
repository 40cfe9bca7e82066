//! In-memory entity store adapter.
//!
//! Backs development and testing. Counts every logical query it serves
//! so the strategies' query-cost contracts are checkable; orders are
//! kept in insertion order, which is the adapter's "order emitted by the
//! query".

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{
    ColumnValue, EntityStorePort, OrderSearch, ProjectionRow, ReadScope, StoreError,
};
use crate::domain::ordering::{
    AssociationKind, Delivery, Member, Order, OrderStatus,
};
use crate::domain::shared::{DeliveryId, MemberId, OrderId, Timestamp};

/// Scalar columns of one stored order row.
#[derive(Debug, Clone)]
struct OrderRecord {
    id: OrderId,
    member_id: MemberId,
    delivery_id: DeliveryId,
    order_date: Timestamp,
    status: OrderStatus,
}

impl OrderRecord {
    fn to_root(&self) -> Order {
        Order::root(
            self.id.clone(),
            self.member_id.clone(),
            self.delivery_id.clone(),
            self.order_date,
            self.status,
        )
    }
}

/// In-memory implementation of [`EntityStorePort`].
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    orders: RwLock<Vec<OrderRecord>>,
    members: RwLock<HashMap<MemberId, Member>>,
    deliveries: RwLock<HashMap<DeliveryId, Delivery>>,
    queries: AtomicU64,
}

impl InMemoryEntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member row.
    pub async fn insert_member(&self, member: Member) {
        self.members
            .write()
            .await
            .insert(member.id().clone(), member);
    }

    /// Insert a delivery row.
    pub async fn insert_delivery(&self, delivery: Delivery) {
        self.deliveries
            .write()
            .await
            .insert(delivery.id().clone(), delivery);
    }

    /// Insert an order row from the order's scalar fields.
    pub async fn insert_order(&self, order: &Order) {
        self.orders.write().await.push(OrderRecord {
            id: order.id().clone(),
            member_id: order.member_id().clone(),
            delivery_id: order.delivery_id().clone(),
            order_date: order.order_date(),
            status: order.status(),
        });
    }

    /// Number of logical queries served since construction (or the last
    /// reset). Each port method call counts as one.
    #[must_use]
    pub fn queries_issued(&self) -> u64 {
        self.queries.load(Ordering::Acquire)
    }

    /// Reset the query counter.
    pub fn reset_query_count(&self) {
        self.queries.store(0, Ordering::Release);
    }

    fn count_query(&self, kind: &str) {
        self.queries.fetch_add(1, Ordering::AcqRel);
        tracing::debug!(query = kind, "in-memory store served query");
    }

    /// Filter a record against the search; the member lookup is part of
    /// the same logical query (a join in a real store), not a second one.
    fn record_matches(
        members: &HashMap<MemberId, Member>,
        record: &OrderRecord,
        search: &OrderSearch,
    ) -> bool {
        if search.member_name.is_none() && search.status.is_none() {
            return true;
        }
        let member_name = members
            .get(&record.member_id)
            .map(Member::name)
            .unwrap_or_default();
        search.matches(member_name, record.status)
    }
}

#[async_trait]
impl EntityStorePort for InMemoryEntityStore {
    async fn find_orders(
        &self,
        _scope: &ReadScope,
        search: &OrderSearch,
    ) -> Result<Vec<Order>, StoreError> {
        self.count_query("find_orders");
        let orders = self.orders.read().await;
        let members = self.members.read().await;
        let result = orders
            .iter()
            .filter(|record| Self::record_matches(&members, record, search))
            .map(OrderRecord::to_root)
            .collect();
        Ok(result)
    }

    async fn find_orders_with_member_and_delivery(
        &self,
        _scope: &ReadScope,
        search: &OrderSearch,
    ) -> Result<Vec<Order>, StoreError> {
        self.count_query("find_orders_with_member_and_delivery");
        let orders = self.orders.read().await;
        let members = self.members.read().await;
        let deliveries = self.deliveries.read().await;

        let mut result = Vec::new();
        for record in orders.iter() {
            if !Self::record_matches(&members, record, search) {
                continue;
            }
            let mut order = record.to_root();
            if let Some(member) = members.get(&record.member_id) {
                order.attach_member(member.clone());
            }
            if let Some(delivery) = deliveries.get(&record.delivery_id) {
                order.attach_delivery(delivery.clone());
            }
            result.push(order);
        }
        Ok(result)
    }

    async fn find_member(
        &self,
        _scope: &ReadScope,
        id: &MemberId,
    ) -> Result<Option<Member>, StoreError> {
        self.count_query("find_member");
        Ok(self.members.read().await.get(id).cloned())
    }

    async fn find_delivery(
        &self,
        _scope: &ReadScope,
        id: &DeliveryId,
    ) -> Result<Option<Delivery>, StoreError> {
        self.count_query("find_delivery");
        Ok(self.deliveries.read().await.get(id).cloned())
    }

    async fn find_order_summary_rows(
        &self,
        _scope: &ReadScope,
    ) -> Result<Vec<ProjectionRow>, StoreError> {
        self.count_query("find_order_summary_rows");
        let orders = self.orders.read().await;
        let members = self.members.read().await;
        let deliveries = self.deliveries.read().await;

        let mut rows = Vec::with_capacity(orders.len());
        for record in orders.iter() {
            let member = members.get(&record.member_id).ok_or_else(|| {
                StoreError::MissingReference {
                    kind: AssociationKind::Member,
                    id: record.member_id.to_string(),
                }
            })?;
            let delivery = deliveries.get(&record.delivery_id).ok_or_else(|| {
                StoreError::MissingReference {
                    kind: AssociationKind::Delivery,
                    id: record.delivery_id.to_string(),
                }
            })?;
            rows.push(ProjectionRow(vec![
                ColumnValue::Text(record.id.to_string()),
                ColumnValue::Text(member.name().to_string()),
                ColumnValue::Timestamp(record.order_date),
                ColumnValue::Text(record.status.to_string()),
                ColumnValue::Text(delivery.address().city().to_string()),
                ColumnValue::Text(delivery.address().street().to_string()),
                ColumnValue::Text(delivery.address().zipcode().to_string()),
            ]));
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ScopeGuard;
    use crate::domain::ordering::DeliveryStatus;
    use crate::domain::shared::Address;

    async fn seeded_store() -> InMemoryEntityStore {
        let store = InMemoryEntityStore::new();
        store
            .insert_member(Member::new(
                MemberId::new("m-1"),
                "A",
                Address::new("Incheon", "Songdo 3", "21990"),
            ))
            .await;
        store
            .insert_delivery(Delivery::new(
                DeliveryId::new("d-1"),
                Address::new("Seoul", "Teheran-ro 1", "06234"),
                DeliveryStatus::Ready,
            ))
            .await;
        store
            .insert_order(&Order::root(
                OrderId::new("o-1"),
                MemberId::new("m-1"),
                DeliveryId::new("d-1"),
                Timestamp::parse("2024-03-01T12:00:00+00:00").unwrap(),
                OrderStatus::Open,
            ))
            .await;
        store
    }

    #[tokio::test]
    async fn find_orders_returns_roots_only() {
        let store = seeded_store().await;
        let guard = ScopeGuard::open();
        let orders = store
            .find_orders(guard.scope(), &OrderSearch::unconstrained())
            .await
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert!(!orders[0].member().is_loaded());
        assert!(!orders[0].delivery().is_loaded());
        assert_eq!(store.queries_issued(), 1);
    }

    #[tokio::test]
    async fn aggregated_find_loads_both_associations() {
        let store = seeded_store().await;
        let guard = ScopeGuard::open();
        let orders = store
            .find_orders_with_member_and_delivery(guard.scope(), &OrderSearch::unconstrained())
            .await
            .unwrap();
        assert!(orders[0].is_fully_loaded());
        assert_eq!(store.queries_issued(), 1);
    }

    #[tokio::test]
    async fn status_filter_applies() {
        let store = seeded_store().await;
        let guard = ScopeGuard::open();
        let open = store
            .find_orders(guard.scope(), &OrderSearch::by_status(OrderStatus::Open))
            .await
            .unwrap();
        assert_eq!(open.len(), 1);
        let cancelled = store
            .find_orders(
                guard.scope(),
                &OrderSearch::by_status(OrderStatus::Cancelled),
            )
            .await
            .unwrap();
        assert!(cancelled.is_empty());
    }

    #[tokio::test]
    async fn member_name_filter_matches_substring() {
        let store = seeded_store().await;
        let guard = ScopeGuard::open();
        let hit = store
            .find_orders(guard.scope(), &OrderSearch::by_member_name("A"))
            .await
            .unwrap();
        assert_eq!(hit.len(), 1);
        let miss = store
            .find_orders(guard.scope(), &OrderSearch::by_member_name("Z"))
            .await
            .unwrap();
        assert!(miss.is_empty());
    }

    #[tokio::test]
    async fn summary_rows_carry_the_fixed_layout() {
        let store = seeded_store().await;
        let guard = ScopeGuard::open();
        let rows = store
            .find_order_summary_rows(guard.scope())
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        let ProjectionRow(columns) = &rows[0];
        assert_eq!(columns.len(), 7);
        assert_eq!(columns[0], ColumnValue::Text("o-1".to_string()));
        assert_eq!(columns[4], ColumnValue::Text("Seoul".to_string()));
    }

    #[tokio::test]
    async fn summary_rows_fail_on_dangling_delivery() {
        let store = seeded_store().await;
        store
            .insert_order(&Order::root(
                OrderId::new("o-2"),
                MemberId::new("m-1"),
                DeliveryId::new("d-missing"),
                Timestamp::parse("2024-03-02T12:00:00+00:00").unwrap(),
                OrderStatus::Open,
            ))
            .await;
        let guard = ScopeGuard::open();
        let err = store
            .find_order_summary_rows(guard.scope())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::MissingReference {
                kind: AssociationKind::Delivery,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn query_counter_resets() {
        let store = seeded_store().await;
        let guard = ScopeGuard::open();
        let _ = store
            .find_member(guard.scope(), &MemberId::new("m-1"))
            .await
            .unwrap();
        assert_eq!(store.queries_issued(), 1);
        store.reset_query_count();
        assert_eq!(store.queries_issued(), 0);
    }
}
