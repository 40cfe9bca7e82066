//! Explicit association loading state.
//!
//! Every to-one association on an order is a tagged value: either the
//! related entity is resident (`Loaded`) or it was deliberately left
//! behind by the producing strategy (`NotLoaded`). There is no implicit
//! on-demand loading; callers pick a strategy that satisfies their
//! traversal needs up front.

use std::fmt;

/// Loading state of a to-one association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Association<T> {
    /// The related entity was not fetched by the producing strategy.
    NotLoaded,
    /// The related entity is fully resident.
    Loaded(T),
}

impl<T> Association<T> {
    /// Returns true if the related entity is resident.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Get the related entity, if resident.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::NotLoaded => None,
        }
    }

    /// Consume and return the related entity, if resident.
    #[must_use]
    pub fn into_loaded(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::NotLoaded => None,
        }
    }
}

/// Which to-one association of an order is being referenced.
///
/// Used in error context so a fault names the edge that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKind {
    /// The order -> member edge.
    Member,
    /// The order -> delivery edge.
    Delivery,
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member => write!(f, "member"),
            Self::Delivery => write!(f, "delivery"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_loaded_is_empty() {
        let assoc: Association<String> = Association::NotLoaded;
        assert!(!assoc.is_loaded());
        assert_eq!(assoc.get(), None);
        assert_eq!(assoc.into_loaded(), None);
    }

    #[test]
    fn loaded_exposes_value() {
        let assoc = Association::Loaded(42);
        assert!(assoc.is_loaded());
        assert_eq!(assoc.get(), Some(&42));
        assert_eq!(assoc.into_loaded(), Some(42));
    }

    #[test]
    fn association_kind_display() {
        assert_eq!(format!("{}", AssociationKind::Member), "member");
        assert_eq!(format!("{}", AssociationKind::Delivery), "delivery");
    }
}
