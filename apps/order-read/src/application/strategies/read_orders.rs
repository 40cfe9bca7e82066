//! Read Orders Use Case
//!
//! Runs one configured strategy end-to-end: open a read scope, fetch,
//! assemble views, release the scope. Strategy choice is explicit
//! configuration, not dispatch magic; the closed set lives in
//! [`FetchStrategy`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::eager_loader::EagerAggregatingLoader;
use super::naive_loader::NaiveGraphLoader;
use super::projection_repository::ProjectionRepository;
use super::view_assembler;
use crate::application::dto::OrderView;
use crate::application::ports::{EntityStorePort, OrderSearch, ReadScopeProviderPort};
use crate::domain::ordering::FetchError;

/// The closed set of fetching strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStrategy {
    /// Roots first, then one secondary query per order per association.
    Naive,
    /// One combined query joining member and delivery.
    EagerJoin,
    /// One query selecting exactly the view's fields.
    Projection,
}

/// Use case for reading order views with a configured strategy.
pub struct ReadOrdersUseCase<S, P>
where
    S: EntityStorePort,
    P: ReadScopeProviderPort,
{
    store: Arc<S>,
    scopes: Arc<P>,
    strategy: FetchStrategy,
}

impl<S, P> ReadOrdersUseCase<S, P>
where
    S: EntityStorePort,
    P: ReadScopeProviderPort,
{
    /// Create a new `ReadOrdersUseCase`.
    pub const fn new(store: Arc<S>, scopes: Arc<P>, strategy: FetchStrategy) -> Self {
        Self {
            store,
            scopes,
            strategy,
        }
    }

    /// The configured strategy.
    #[must_use]
    pub const fn strategy(&self) -> FetchStrategy {
        self.strategy
    }

    /// Fetch and assemble order views. Result rows keep the order the
    /// underlying query emitted them in; nothing is re-sorted here.
    pub async fn execute(&self, search: &OrderSearch) -> Result<Vec<OrderView>, FetchError> {
        let guard = self.scopes.open_scope();
        let scope = guard.scope();
        tracing::debug!(strategy = ?self.strategy, "reading order views");

        match self.strategy {
            FetchStrategy::Naive => {
                let loader = NaiveGraphLoader::new(Arc::clone(&self.store));
                let mut orders = loader.fetch_all(scope, search).await?;
                for order in &mut orders {
                    loader.resolve_associations(scope, order).await?;
                }
                view_assembler::to_views(&orders)
            }
            FetchStrategy::EagerJoin => {
                let loader = EagerAggregatingLoader::new(Arc::clone(&self.store));
                let orders = loader
                    .fetch_all_with_member_and_delivery(scope, search)
                    .await?;
                view_assembler::to_views(&orders)
            }
            FetchStrategy::Projection => {
                let repo = ProjectionRepository::new(Arc::clone(&self.store));
                let summaries = repo.fetch_order_summaries(scope).await?;
                // The projection query serves the fixed summary shape; the
                // filter is applied to the decoded rows so the strategies
                // stay interchangeable behind one contract.
                let filtered = summaries
                    .into_iter()
                    .filter(|summary| search.matches(&summary.member_name, summary.status))
                    .collect();
                Ok(view_assembler::from_summaries(filtered))
            }
        }
        // guard drops here; the scope closes with it.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockEntityStorePort, MockReadScopeProviderPort, ScopeGuard};

    #[tokio::test]
    async fn execute_opens_one_scope_per_call() {
        let mut store = MockEntityStorePort::new();
        store.expect_find_orders().returning(|_, _| Ok(vec![]));

        let mut scopes = MockReadScopeProviderPort::new();
        scopes.expect_open_scope().times(1).returning(ScopeGuard::open);

        let use_case = ReadOrdersUseCase::new(
            Arc::new(store),
            Arc::new(scopes),
            FetchStrategy::Naive,
        );
        let views = use_case.execute(&OrderSearch::unconstrained()).await.unwrap();
        assert!(views.is_empty());
    }

    #[test]
    fn strategy_serializes_snake_case() {
        let json = serde_json::to_string(&FetchStrategy::EagerJoin).unwrap();
        assert_eq!(json, "\"eager_join\"");
    }
}
