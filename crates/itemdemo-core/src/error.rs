//! Shared error type across itemdemo crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Path or query parameter failed type coercion.
    ValidationFailed,
    /// No route matched.
    NotFound,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status the code is reported with.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::ValidationFailed => 422,
            ClientCode::NotFound => 404,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bind {addr} failed: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("internal: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ServiceError::Validation(_) => ClientCode::ValidationFailed,
            ServiceError::NotFound(_) => ClientCode::NotFound,
            ServiceError::Bind { .. } | ServiceError::Internal(_) => ClientCode::Internal,
        }
    }
}
