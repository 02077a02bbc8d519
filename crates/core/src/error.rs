//! Error types for pagination
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! | Error | Cause | Boundary mapping |
//! |-------|-------|------------------|
//! | [`DecodeError`] | Malformed cursor token from the client | 4xx |
//! | [`PaginationError::InvalidRequest`] | Contradictory or out-of-range request | 4xx |
//! | [`QueryError`] | Failure inside the query executor | 5xx |

use thiserror::Error;

/// Result type alias for pagination operations
pub type PaginationResult<T> = std::result::Result<T, PaginationError>;

/// A cursor token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Token is not valid padded base64
    #[error("malformed cursor token: {reason}")]
    Malformed {
        /// Decoder diagnostic
        reason: String,
    },

    /// Token decodes to bytes that are not a UTF-8 string
    #[error("cursor payload is not valid UTF-8 (valid up to byte {valid_up_to})")]
    NotUtf8 {
        /// Length of the longest valid UTF-8 prefix
        valid_up_to: usize,
    },
}

/// Opaque failure reported by a query executor.
///
/// The paginator never inspects it; it is handed back to the caller as is.
#[derive(Debug, Error)]
#[error("query failed: {message}")]
pub struct QueryError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl QueryError {
    /// Create a query error from a message
    pub fn new(message: impl Into<String>) -> Self {
        QueryError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a query error wrapping an underlying driver error
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        QueryError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The executor's message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by a page fetch
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The supplied cursor could not be decoded
    #[error("invalid cursor: {0}")]
    Decode(#[from] DecodeError),

    /// The query executor failed
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The request itself is unusable (both cursors, zero limit, bad column)
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// What is wrong with the request
        reason: String,
    },
}

impl PaginationError {
    /// Shorthand for [`PaginationError::InvalidRequest`]
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        PaginationError::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Whether the caller caused this error (bad cursor or bad request).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PaginationError::Decode(_) | PaginationError::InvalidRequest { .. }
        )
    }
}
