//! Read-scope adapters.

mod local;

pub use local::LocalScopeProvider;
