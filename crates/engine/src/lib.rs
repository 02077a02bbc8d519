//! Pagination engine for pagewalk
//!
//! This crate turns page requests into queries and query results into pages:
//! - Paginator: builds seek/order/limit queries and assembles pages
//! - Query / QueryExecutor: the row-source seam the paginator reads through
//! - MemoryTable: in-memory executor for embedded use and tests
//! - sql: parameterized SQL rendering for relational executors
//! - PaginationConfig: limits loaded from `pagewalk.toml`
//!
//! The engine holds no state between calls. Storage, connection handling and
//! cancellation all belong to the executor.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod memory;
pub mod paginator;
pub mod query;
pub mod sql;

pub use config::{ConfigError, PaginationConfig, CONFIG_FILE_NAME};
pub use memory::{MemoryTable, Record};
pub use paginator::Paginator;
pub use query::{OrderBy, Query, QueryExecutor, Seek, SeekOp};
pub use sql::{render as render_sql, SqlStatement};
