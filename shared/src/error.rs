//! Domain errors
//!
//! Raised by constructors and the order composer before anything is sent
//! to the backend.

use thiserror::Error;

/// Domain rule violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A field failed validation (empty, out of range, ...)
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// The menu item is marked as not available
    #[error("menu item {0} is not available")]
    ItemUnavailable(i64),

    /// No order line with this id
    #[error("order line {0} not found")]
    UnknownLine(u64),

    /// Tried to submit an order without lines
    #[error("order must contain at least one dish")]
    EmptyOrder,
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
