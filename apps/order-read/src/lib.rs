// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Read - Rust Core Library
//!
//! Read-path fetching strategies for order graphs
//! (order -> member, order -> delivery -> address).
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Entities and value objects with explicit association
//!   residency
//!   - `ordering`: Order, Member, Delivery, `Association<T>`, `FetchError`
//!   - `shared`: identifiers, `Timestamp`, `Address`
//!
//! - **Application**: Strategies and port definitions
//!   - `ports`: `EntityStorePort`, `ReadScopeProviderPort`
//!   - `strategies`: `NaiveGraphLoader`, `EagerAggregatingLoader`,
//!     `ProjectionRepository`, `view_assembler`, `ReadOrdersUseCase`
//!   - `dto`: `OrderView`, `OrderSummary`
//!
//! - **Infrastructure**: Adapters
//!   - `persistence`: query-counting in-memory entity store
//!   - `scope`: local read-scope provider
//!   - `config`: dependency injection container
//!
//! # Query-cost contracts
//!
//! | Strategy | Queries for N orders | Associations resident |
//! |----------|----------------------|-----------------------|
//! | Naive | 1 + 2N (if traversed) | on demand |
//! | Eager join | 1 | member, delivery |
//! | Projection | 1 | n/a (flat summary) |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core read-graph model with no external dependencies.
pub mod domain;

/// Application layer - Fetching strategies and port definitions.
pub mod application;

/// Infrastructure layer - Adapters for the ports.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::ordering::{
    Association, AssociationKind, Delivery, DeliveryStatus, FetchError, Member, Order,
    OrderStatus,
};
pub use domain::shared::{Address, DeliveryId, MemberId, OrderId, Timestamp};

// Application re-exports
pub use application::dto::{OrderSummary, OrderView};
pub use application::ports::{
    ColumnValue, EntityStorePort, OrderSearch, ProjectionRow, ReadScope, ReadScopeProviderPort,
    ScopeGuard, StoreError,
};
pub use application::strategies::{
    EagerAggregatingLoader, FetchStrategy, NaiveGraphLoader, ProjectionRepository,
    ReadOrdersUseCase, view_assembler,
};

// Infrastructure re-exports
pub use infrastructure::config::Container;
pub use infrastructure::persistence::InMemoryEntityStore;
pub use infrastructure::scope::LocalScopeProvider;
