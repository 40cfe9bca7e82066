//! Entity Store Port (Driven Port)
//!
//! Query primitives consumed by the fetching strategies. Each method is
//! exactly one logical query against the backing store; the strategies
//! build their query-cost contracts on top of that guarantee.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::read_scope_port::ReadScope;
use crate::domain::ordering::{
    AssociationKind, Delivery, FetchError, Member, Order, OrderStatus,
};
use crate::domain::shared::{DeliveryId, MemberId, Timestamp};

/// Filter for order root queries. Absent fields mean no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSearch {
    /// Substring match against the owning member's name.
    pub member_name: Option<String>,
    /// Exact status match.
    pub status: Option<OrderStatus>,
}

impl OrderSearch {
    /// No constraints: every order matches.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            member_name: None,
            status: None,
        }
    }

    /// Constrain by status.
    #[must_use]
    pub const fn by_status(status: OrderStatus) -> Self {
        Self {
            member_name: None,
            status: Some(status),
        }
    }

    /// Constrain by member-name substring.
    #[must_use]
    pub fn by_member_name(pattern: impl Into<String>) -> Self {
        Self {
            member_name: Some(pattern.into()),
            status: None,
        }
    }

    /// Returns true if an order with the given owner name and status
    /// satisfies this filter.
    #[must_use]
    pub fn matches(&self, member_name: &str, status: OrderStatus) -> bool {
        let name_ok = self
            .member_name
            .as_ref()
            .is_none_or(|pattern| member_name.contains(pattern.as_str()));
        let status_ok = self.status.is_none_or(|wanted| wanted == status);
        name_ok && status_ok
    }
}

/// A single loosely-typed column value in a projection row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    /// Text column.
    Text(String),
    /// Timestamp column.
    Timestamp(Timestamp),
}

/// One raw row of the order-summary projection query.
///
/// Column layout (fixed): order id, member name, order date, order
/// status, delivery city, delivery street, delivery zipcode. The
/// projection repository owns decoding and rejects any drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionRow(pub Vec<ColumnValue>);

/// Entity store error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// A row referenced an entity that does not exist.
    #[error("referenced {kind} not found: {id}")]
    MissingReference {
        /// Kind of the missing entity.
        kind: AssociationKind,
        /// Identifier of the missing entity.
        id: String,
    },

    /// The query itself failed.
    #[error("query failed: {message}")]
    QueryFailed {
        /// Error details.
        message: String,
    },
}

impl From<StoreError> for FetchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingReference { kind, id } => Self::NotFound { kind, id },
            StoreError::QueryFailed { message } => Self::Store { message },
        }
    }
}

/// Port exposing the entity access primitives.
///
/// Every method issues exactly one logical query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStorePort: Send + Sync {
    /// Fetch order roots matching the filter; associations come back
    /// `NotLoaded`.
    async fn find_orders(
        &self,
        scope: &ReadScope,
        search: &OrderSearch,
    ) -> Result<Vec<Order>, StoreError>;

    /// Fetch order roots with member and delivery aggregated in the same
    /// query; to-one associations come back `Loaded`. A dangling
    /// reference leaves that association `NotLoaded` so the caller can
    /// surface the integrity fault with context.
    async fn find_orders_with_member_and_delivery(
        &self,
        scope: &ReadScope,
        search: &OrderSearch,
    ) -> Result<Vec<Order>, StoreError>;

    /// Fetch one member by id.
    async fn find_member(
        &self,
        scope: &ReadScope,
        id: &MemberId,
    ) -> Result<Option<Member>, StoreError>;

    /// Fetch one delivery by id.
    async fn find_delivery(
        &self,
        scope: &ReadScope,
        id: &DeliveryId,
    ) -> Result<Option<Delivery>, StoreError>;

    /// Fetch the raw order-summary projection rows: exactly one row per
    /// order, no duplication from relations elsewhere in the schema.
    async fn find_order_summary_rows(
        &self,
        scope: &ReadScope,
    ) -> Result<Vec<ProjectionRow>, StoreError>;
}
