//! Client error types

use shared::DomainError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure: connection refused, DNS, timeout, ...
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Availability probe did not confirm the table
    #[error("Table {table_id} is not available on {date} at {time}")]
    TableUnavailable {
        table_id: i64,
        date: String,
        time: String,
    },

    /// Input rejected before any request was made
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// Message shown when a table cannot be booked
pub const TABLE_UNAVAILABLE_MESSAGE: &str =
    "La mesa no está disponible en la fecha y hora seleccionadas.";

impl ClientError {
    /// Text for the end user
    ///
    /// Transport, status and decoding failures all collapse into the
    /// screen's `fallback`; the user cannot tell "server down" from
    /// "server rejected". Domain rules keep their own wording.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::TableUnavailable { .. } => TABLE_UNAVAILABLE_MESSAGE.to_string(),
            ClientError::Validation(e) => format!("Datos no válidos: {e}"),
            _ => fallback.to_string(),
        }
    }

    /// Whether the failure came from the network or the backend
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            ClientError::Transport(_)
                | ClientError::HttpStatus { .. }
                | ClientError::InvalidResponse(_)
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Outcome of a backend write as recorded in the audit log
pub fn write_outcome<T>(result: &ClientResult<T>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(ClientError::HttpStatus { .. }) => "rejected",
        Err(_) => "failed",
    }
}
