//! Boundary error type.
//!
//! [`Error`] is what leaves the library towards an HTTP layer. Unlike the
//! internal [`PaginationError`], it is:
//! - **Serializable**: can be converted to/from JSON
//! - **Classified**: each variant has a stable `code()` and an HTTP `status()`
//!
//! | Variant | Code | Status |
//! |---------|------|--------|
//! | `InvalidCursor` | `invalid_cursor` | 400 |
//! | `InvalidRequest` | `invalid_request` | 400 |
//! | `QueryFailed` | `query_failed` | 500 |

use serde::{Deserialize, Serialize};
use tracing::error;

use pagewalk_core::PaginationError;

/// Pagination errors as seen by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Cursor token could not be decoded
    #[error("invalid cursor: {reason}")]
    InvalidCursor {
        /// What went wrong
        reason: String,
    },

    /// Request parameters are unusable
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// What went wrong
        reason: String,
    },

    /// Query executor failed
    #[error("query failed: {reason}")]
    QueryFailed {
        /// What went wrong
        reason: String,
    },
}

impl Error {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidCursor { .. } => "invalid_cursor",
            Error::InvalidRequest { .. } => "invalid_request",
            Error::QueryFailed { .. } => "query_failed",
        }
    }

    /// HTTP status to answer with
    pub fn status(&self) -> u16 {
        match self {
            Error::InvalidCursor { .. } | Error::InvalidRequest { .. } => 400,
            Error::QueryFailed { .. } => 500,
        }
    }

    /// Human-readable description without the code prefix
    pub fn description(&self) -> &str {
        match self {
            Error::InvalidCursor { reason }
            | Error::InvalidRequest { reason }
            | Error::QueryFailed { reason } => reason,
        }
    }
}

impl From<PaginationError> for Error {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::Decode(e) => Error::InvalidCursor {
                reason: e.to_string(),
            },
            PaginationError::InvalidRequest { reason } => Error::InvalidRequest { reason },
            PaginationError::Query(e) => {
                // Executor details stay in the logs; clients get the message only.
                error!(target: "pagewalk::boundary", error = ?e, "Query failed");
                Error::QueryFailed {
                    reason: e.message().to_string(),
                }
            }
        }
    }
}
