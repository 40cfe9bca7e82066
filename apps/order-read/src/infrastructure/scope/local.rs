//! Local read-scope provider.

use crate::application::ports::{ReadScopeProviderPort, ScopeGuard};

/// Scope provider for stores whose reads are always consistent (the
/// in-memory adapter). Each call opens a fresh scope; the guard still
/// enforces the close-on-release contract the naive loader depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalScopeProvider;

impl LocalScopeProvider {
    /// Create a new provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReadScopeProviderPort for LocalScopeProvider {
    fn open_scope(&self) -> ScopeGuard {
        ScopeGuard::open()
    }
}
