//! Read Scope Port (Driven Port)
//!
//! A read scope is the window during which the backing data presents a
//! consistent view: the root fetch and any later on-demand association
//! fetches must happen inside the same scope. Scopes are explicit values
//! passed into every strategy call; there is no ambient or thread-local
//! scope state. Release is guaranteed by the guard's `Drop`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to an open (or since-closed) consistent-read window.
///
/// Cheap to clone; all clones observe the same open/closed state.
#[derive(Debug, Clone)]
pub struct ReadScope {
    open: Arc<AtomicBool>,
}

impl ReadScope {
    fn new() -> Self {
        Self {
            open: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Returns true while the consistent-read window is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    fn close(&self) {
        self.open.store(false, Ordering::Release);
    }
}

/// Owns an open read scope and closes it when dropped.
#[derive(Debug)]
pub struct ScopeGuard {
    scope: ReadScope,
}

impl ScopeGuard {
    /// Open a fresh read scope.
    #[must_use]
    pub fn open() -> Self {
        Self {
            scope: ReadScope::new(),
        }
    }

    /// Borrow the scope handle to pass into strategy calls.
    #[must_use]
    pub const fn scope(&self) -> &ReadScope {
        &self.scope
    }

    /// Close the scope now instead of waiting for drop.
    pub fn close(self) {
        // Drop does the work.
        drop(self);
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.scope.close();
    }
}

/// Port for acquiring consistent-read scopes.
#[cfg_attr(test, mockall::automock)]
pub trait ReadScopeProviderPort: Send + Sync {
    /// Open a new consistent-read scope.
    fn open_scope(&self) -> ScopeGuard;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_is_open_until_guard_drops() {
        let guard = ScopeGuard::open();
        let scope = guard.scope().clone();
        assert!(scope.is_open());
        drop(guard);
        assert!(!scope.is_open());
    }

    #[test]
    fn explicit_close_matches_drop() {
        let guard = ScopeGuard::open();
        let scope = guard.scope().clone();
        guard.close();
        assert!(!scope.is_open());
    }

    #[test]
    fn clones_observe_the_same_state() {
        let guard = ScopeGuard::open();
        let a = guard.scope().clone();
        let b = a.clone();
        drop(guard);
        assert!(!a.is_open());
        assert!(!b.is_open());
    }
}
