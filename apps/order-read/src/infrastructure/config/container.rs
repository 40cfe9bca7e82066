//! Dependency Injection Container
//!
//! Wires the entity store, the scope provider, and the configured fetch
//! strategy into the read use case.

use std::sync::Arc;

use crate::application::ports::{EntityStorePort, ReadScopeProviderPort};
use crate::application::strategies::{FetchStrategy, ReadOrdersUseCase};
use crate::infrastructure::persistence::InMemoryEntityStore;
use crate::infrastructure::scope::LocalScopeProvider;

/// Dependency injection container.
///
/// Holds the wired collaborators; the strategy is explicit configuration
/// chosen at wiring time, not negotiated at call time.
pub struct Container<S, P>
where
    S: EntityStorePort + 'static,
    P: ReadScopeProviderPort + 'static,
{
    store: Arc<S>,
    scope_provider: Arc<P>,
    strategy: FetchStrategy,
}

impl<S, P> Container<S, P>
where
    S: EntityStorePort + 'static,
    P: ReadScopeProviderPort + 'static,
{
    /// Create a new container with all dependencies.
    pub const fn new(store: Arc<S>, scope_provider: Arc<P>, strategy: FetchStrategy) -> Self {
        Self {
            store,
            scope_provider,
            strategy,
        }
    }

    /// Get the entity store.
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Get the scope provider.
    pub fn scope_provider(&self) -> Arc<P> {
        Arc::clone(&self.scope_provider)
    }

    /// The configured fetch strategy.
    #[must_use]
    pub const fn strategy(&self) -> FetchStrategy {
        self.strategy
    }

    /// Create a `ReadOrdersUseCase` wired with this container's
    /// collaborators.
    pub fn read_orders_use_case(&self) -> ReadOrdersUseCase<S, P> {
        ReadOrdersUseCase::new(
            Arc::clone(&self.store),
            Arc::clone(&self.scope_provider),
            self.strategy,
        )
    }
}

impl Container<InMemoryEntityStore, LocalScopeProvider> {
    /// Wire the in-memory adapters with the given strategy.
    #[must_use]
    pub fn in_memory(strategy: FetchStrategy) -> Self {
        Self::new(
            Arc::new(InMemoryEntityStore::new()),
            Arc::new(LocalScopeProvider::new()),
            strategy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::OrderSearch;

    #[tokio::test]
    async fn in_memory_container_wires_a_working_use_case() {
        let container = Container::in_memory(FetchStrategy::EagerJoin);
        assert_eq!(container.strategy(), FetchStrategy::EagerJoin);

        let use_case = container.read_orders_use_case();
        let views = use_case
            .execute(&OrderSearch::unconstrained())
            .await
            .unwrap();
        assert!(views.is_empty());
        assert_eq!(container.store().queries_issued(), 1);
    }
}
