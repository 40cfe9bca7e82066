//! Fetching Strategies
//!
//! Four composable pieces, increasing in specialization and decreasing
//! in reusability and query count:
//!
//! 1. [`NaiveGraphLoader`] - roots only, secondary query per traversal.
//! 2. [`EagerAggregatingLoader`] - one combined query for the to-one graph.
//! 3. [`ProjectionRepository`] - one query shaped exactly like the output.
//! 4. [`view_assembler`] - pure mapping into the single output shape.
//!
//! [`ReadOrdersUseCase`] selects among them by explicit configuration.

mod eager_loader;
mod naive_loader;
mod projection_repository;
mod read_orders;
pub mod view_assembler;

pub use eager_loader::EagerAggregatingLoader;
pub use naive_loader::NaiveGraphLoader;
pub use projection_repository::ProjectionRepository;
pub use read_orders::{FetchStrategy, ReadOrdersUseCase};
