//! Pagination Tests
//!
//! End-to-end page walks through the public facade:
//! - scenarios: fixed datasets with known pages
//! - traversal: forward/backward walks and their invariants (incl. proptest)
//! - errors: rejected requests, bad cursors, executor failures
//! - concurrency: shared paginator and table across threads

mod common;

mod concurrency;
mod errors;
mod scenarios;
