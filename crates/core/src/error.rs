//! Domain error model.

use thiserror::Error;

/// Result type used across the storefront crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Queries and aggregations are total and never produce one of these; they
/// only surface at boundaries where raw input becomes domain data (catalog
/// construction, cart edits, shop parameter validation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input: bad amount, unknown sort key, inverted price range.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// Two records share an id.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("'{product}' is out of stock")]
    OutOfStock { product: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
