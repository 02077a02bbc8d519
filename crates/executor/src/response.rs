//! JSON responses for page fetches.
//!
//! Success bodies are the serialized [`Page`]. Failure bodies use a flat
//! envelope:
//!
//! ```json
//! {"type": "error", "code": "invalid_cursor", "description": "malformed cursor token: ..."}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use pagewalk_core::{Page, PaginationResult};

use crate::error::Error;

/// Body sent for failed requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `"error"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Machine-readable code
    pub code: String,
    /// Human-readable description
    pub description: String,
}

impl ErrorBody {
    /// Envelope for `code` and `description`
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        ErrorBody {
            kind: "error".to_string(),
            code: code.into(),
            description: description.into(),
        }
    }
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        ErrorBody::new(err.code(), err.description())
    }
}

/// Status code plus JSON body, ready for any HTTP framework to send
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status
    pub status: u16,
    /// JSON body
    pub body: JsonValue,
}

impl Response {
    /// Serialize `body` with `status`.
    ///
    /// A body that cannot be serialized becomes a 500 error response.
    pub fn json<B: Serialize>(status: u16, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Response { status, body },
            Err(e) => Response::error(500, "serialization_failed", e.to_string()),
        }
    }

    /// Error envelope with `status`
    pub fn error(status: u16, code: &str, description: impl Into<String>) -> Self {
        let body = ErrorBody::new(code, description);
        Response {
            status,
            body: serde_json::json!({
                "type": body.kind,
                "code": body.code,
                "description": body.description,
            }),
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<Error> for Response {
    fn from(err: Error) -> Self {
        Response::error(err.status(), err.code(), err.description())
    }
}

/// Map a page fetch outcome to a response.
pub fn respond<T: Serialize>(result: PaginationResult<Page<T>>) -> Response {
    match result {
        Ok(page) => Response::json(200, &page),
        Err(e) => Error::from(e).into(),
    }
}
