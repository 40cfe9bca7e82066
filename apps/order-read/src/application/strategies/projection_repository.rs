//! Projection Repository
//!
//! Issues one query whose select list is exactly the summary fields and
//! decodes the raw rows into [`OrderSummary`] values. No entity is ever
//! materialized; the result is a closed, flat value with nothing left to
//! traverse. Single-purpose by design: a different view shape needs its
//! own projection query.

use std::sync::Arc;

use crate::application::dto::OrderSummary;
use crate::application::ports::{ColumnValue, EntityStorePort, ProjectionRow, ReadScope};
use crate::domain::ordering::{FetchError, OrderStatus};
use crate::domain::shared::{Address, OrderId, Timestamp};

/// Fixed column layout of the summary projection:
/// order id, member name, order date, status, city, street, zipcode.
const SUMMARY_COLUMNS: usize = 7;

/// Repository producing flat order summaries from a single query.
pub struct ProjectionRepository<S: EntityStorePort> {
    store: Arc<S>,
}

impl<S: EntityStorePort> ProjectionRepository<S> {
    /// Create a new `ProjectionRepository`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch all order summaries. One query, exactly one row per order.
    ///
    /// # Errors
    ///
    /// `ProjectionShapeMismatch` if a row's column count or types drifted
    /// from the expected layout. This is a wiring fault and should be
    /// caught at startup or in tests, not handled at runtime.
    pub async fn fetch_order_summaries(
        &self,
        scope: &ReadScope,
    ) -> Result<Vec<OrderSummary>, FetchError> {
        let rows = self.store.find_order_summary_rows(scope).await?;
        tracing::debug!(rows = rows.len(), "projection query returned summary rows");
        rows.into_iter().map(Self::decode_row).collect()
    }

    fn decode_row(row: ProjectionRow) -> Result<OrderSummary, FetchError> {
        let ProjectionRow(columns) = row;
        if columns.len() != SUMMARY_COLUMNS {
            return Err(FetchError::ProjectionShapeMismatch {
                expected: format!("{SUMMARY_COLUMNS} columns"),
                actual: format!("{} columns", columns.len()),
            });
        }

        let mut columns = columns.into_iter();
        let order_id = OrderId::new(Self::text(columns.next(), "order_id")?);
        let member_name = Self::text(columns.next(), "member_name")?;
        let order_date = Self::timestamp(columns.next(), "order_date")?;
        let status = Self::status(columns.next())?;
        let city = Self::text(columns.next(), "city")?;
        let street = Self::text(columns.next(), "street")?;
        let zipcode = Self::text(columns.next(), "zipcode")?;

        Ok(OrderSummary {
            order_id,
            member_name,
            order_date,
            status,
            delivery_address: Address::new(city, street, zipcode),
        })
    }

    fn text(column: Option<ColumnValue>, name: &str) -> Result<String, FetchError> {
        match column {
            Some(ColumnValue::Text(value)) => Ok(value),
            other => Err(Self::column_mismatch(name, "text", &other)),
        }
    }

    fn timestamp(column: Option<ColumnValue>, name: &str) -> Result<Timestamp, FetchError> {
        match column {
            Some(ColumnValue::Timestamp(value)) => Ok(value),
            other => Err(Self::column_mismatch(name, "timestamp", &other)),
        }
    }

    fn status(column: Option<ColumnValue>) -> Result<OrderStatus, FetchError> {
        let text = Self::text(column, "status")?;
        text.parse()
            .map_err(|_| FetchError::ProjectionShapeMismatch {
                expected: "status column with a known order status".to_string(),
                actual: format!("'{text}'"),
            })
    }

    fn column_mismatch(name: &str, expected: &str, actual: &Option<ColumnValue>) -> FetchError {
        FetchError::ProjectionShapeMismatch {
            expected: format!("{expected} column '{name}'"),
            actual: format!("{actual:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockEntityStorePort, ScopeGuard};

    fn good_row() -> ProjectionRow {
        ProjectionRow(vec![
            ColumnValue::Text("o-1".to_string()),
            ColumnValue::Text("A".to_string()),
            ColumnValue::Timestamp(Timestamp::parse("2024-03-01T12:00:00+00:00").unwrap()),
            ColumnValue::Text("OPEN".to_string()),
            ColumnValue::Text("Seoul".to_string()),
            ColumnValue::Text("Teheran-ro 1".to_string()),
            ColumnValue::Text("06234".to_string()),
        ])
    }

    async fn summaries_for(
        rows: Vec<ProjectionRow>,
    ) -> Result<Vec<OrderSummary>, FetchError> {
        let mut store = MockEntityStorePort::new();
        store
            .expect_find_order_summary_rows()
            .return_once(move |_| Ok(rows));
        let repo = ProjectionRepository::new(Arc::new(store));
        let guard = ScopeGuard::open();
        repo.fetch_order_summaries(guard.scope()).await
    }

    #[tokio::test]
    async fn decodes_well_formed_rows() {
        let summaries = summaries_for(vec![good_row()]).await.unwrap();
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.order_id.as_str(), "o-1");
        assert_eq!(summary.member_name, "A");
        assert_eq!(summary.status, OrderStatus::Open);
        assert_eq!(summary.delivery_address.city(), "Seoul");
    }

    #[tokio::test]
    async fn wrong_arity_is_shape_mismatch() {
        let ProjectionRow(mut columns) = good_row();
        columns.pop();
        let err = summaries_for(vec![ProjectionRow(columns)]).await.unwrap_err();
        assert_eq!(
            err,
            FetchError::ProjectionShapeMismatch {
                expected: "7 columns".to_string(),
                actual: "6 columns".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn wrong_column_type_is_shape_mismatch() {
        let ProjectionRow(mut columns) = good_row();
        // order_date column drifted to text
        columns[2] = ColumnValue::Text("2024-03-01".to_string());
        let err = summaries_for(vec![ProjectionRow(columns)]).await.unwrap_err();
        assert!(matches!(err, FetchError::ProjectionShapeMismatch { .. }));
    }

    #[tokio::test]
    async fn unknown_status_text_is_shape_mismatch() {
        let ProjectionRow(mut columns) = good_row();
        columns[3] = ColumnValue::Text("SHIPPED".to_string());
        let err = summaries_for(vec![ProjectionRow(columns)]).await.unwrap_err();
        assert!(matches!(err, FetchError::ProjectionShapeMismatch { .. }));
    }
}
