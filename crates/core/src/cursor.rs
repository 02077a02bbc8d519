//! Opaque pagination cursors
//!
//! A [`Cursor`] wraps a single sort-key value in a printable token so that
//! clients can resume a traversal without knowing anything about the column
//! it was taken from. The encoding is standard, padded base64 over the raw
//! bytes of the value:
//!
//! | Value | Token |
//! |-------|-------|
//! | `"3"` | `"Mw=="` |
//! | `"10"` | `"MTA="` |
//! | `""` | `""` |
//!
//! The codec is purely syntactic. It does not know whether the value is a
//! number, a timestamp or text; the query executor interprets the decoded
//! string when it compares rows against it.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Opaque token encoding one sort-key value.
///
/// Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Encode a sort-key value into a cursor.
    ///
    /// Deterministic and lossless: the input is not trimmed or normalized.
    pub fn encode(value: &str) -> Self {
        Self::encode_bytes(value.as_bytes())
    }

    /// Encode an arbitrary byte payload into a cursor.
    pub fn encode_bytes(bytes: &[u8]) -> Self {
        Cursor(BASE64.encode(bytes))
    }

    /// Wrap a token received from a client.
    ///
    /// No validation happens here; a malformed token is reported by
    /// [`Cursor::decode`] when the cursor is used.
    pub fn from_token(token: impl Into<String>) -> Self {
        Cursor(token.into())
    }

    /// The wire token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the cursor, returning the wire token.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Decode the raw payload bytes.
    ///
    /// Never fails for a validly encoded token, whatever bytes it carries.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Malformed`] if the token is not padded base64.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        BASE64
            .decode(self.0.as_bytes())
            .map_err(|e| DecodeError::Malformed {
                reason: e.to_string(),
            })
    }

    /// Decode the sort-key value carried by this cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Malformed`] if the token is not padded base64,
    /// or [`DecodeError::NotUtf8`] if the payload is not a UTF-8 string.
    pub fn decode(&self) -> Result<String, DecodeError> {
        let bytes = self.decode_bytes()?;
        String::from_utf8(bytes).map_err(|e| DecodeError::NotUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        })
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cursor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Cursor::from_token(s))
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Cursor(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Cursor(token.to_string())
    }
}

impl AsRef<str> for Cursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
