//! Application Ports (Driven)
//!
//! Ports define the collaborator interfaces the fetching strategies
//! consume: the entity store's query primitives and the consistent-read
//! scope provider.

mod entity_store_port;
mod read_scope_port;

pub use entity_store_port::{
    ColumnValue, EntityStorePort, OrderSearch, ProjectionRow, StoreError,
};
pub use read_scope_port::{ReadScope, ReadScopeProviderPort, ScopeGuard};

#[cfg(test)]
pub use entity_store_port::MockEntityStorePort;
#[cfg(test)]
pub use read_scope_port::MockReadScopeProviderPort;
