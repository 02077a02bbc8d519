//! Boundary adapter for pagewalk
//!
//! Maps page fetch outcomes to what an HTTP layer sends back:
//! - [`Error`]: client-facing error with a stable code and HTTP status
//! - [`ErrorBody`]: `{"type": "error", "code": ..., "description": ...}` envelope
//! - [`Response`] / [`respond`]: status plus JSON body for a page fetch
//!
//! # Example
//!
//! ```ignore
//! let result = paginator.fetch_page(&table, &request, &context);
//! let response = pagewalk_executor::respond(result);
//! send(response.status, response.body);
//! ```

#![warn(missing_docs)]

mod error;
mod response;


pub use error::Error;
pub use response::{respond, ErrorBody, Response};
