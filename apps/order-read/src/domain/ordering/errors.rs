//! Order fetching errors.

use std::fmt;

use super::association::AssociationKind;

/// Errors that can occur while fetching and assembling order views.
///
/// Nothing at this layer retries or swallows; every variant propagates
/// unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// A referenced member or delivery does not exist. Data-integrity
    /// fault, never coerced to a null field.
    NotFound {
        /// Which association edge dangled.
        kind: AssociationKind,
        /// Identifier of the missing entity.
        id: String,
    },

    /// An association was traversed after its backing read scope closed.
    StaleResultAccess {
        /// Which association edge was traversed.
        kind: AssociationKind,
        /// Order whose association was touched.
        order_id: String,
    },

    /// A view was assembled from an order whose association was never
    /// fetched; the caller picked a strategy that does not satisfy its
    /// traversal needs.
    NotLoaded {
        /// Which association edge is missing.
        kind: AssociationKind,
        /// Order being assembled.
        order_id: String,
    },

    /// A projection row does not match the expected flat shape. Fatal
    /// misconfiguration, not a runtime-recoverable condition.
    ProjectionShapeMismatch {
        /// What the decoder expected.
        expected: String,
        /// What the row carried.
        actual: String,
    },

    /// The entity store failed.
    Store {
        /// Store error detail.
        message: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { kind, id } => {
                write!(f, "Referenced {kind} not found: {id}")
            }
            Self::StaleResultAccess { kind, order_id } => {
                write!(
                    f,
                    "Stale result access: {kind} of order {order_id} traversed after read scope closed"
                )
            }
            Self::NotLoaded { kind, order_id } => {
                write!(
                    f,
                    "Association {kind} of order {order_id} was not loaded by the producing strategy"
                )
            }
            Self::ProjectionShapeMismatch { expected, actual } => {
                write!(f, "Projection shape mismatch: expected {expected}, got {actual}")
            }
            Self::Store { message } => {
                write!(f, "Entity store failure: {message}")
            }
        }
    }
}

impl std::error::Error for FetchError {}
