//! Core types for pagewalk
//!
//! This crate defines the foundational types of cursor pagination:
//! - Cursor: opaque, reversible token carrying one sort-key value
//! - Value: scalar column value with cursor-key coercion
//! - Filter: typed condition tree supplied by the caller
//! - PageRequest / Traversal: where a page fetch starts and which way it walks
//! - QueryContext: collection, filter and sort-key extraction for a row type
//! - Page: the bounded, naturally ordered result
//! - Error: DecodeError, QueryError, PaginationError

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod error;
pub mod filter;
pub mod page;
pub mod request;
pub mod value;

pub use cursor::Cursor;
pub use error::{DecodeError, PaginationError, PaginationResult, QueryError};
pub use filter::{CompareOp, Filter};
pub use page::Page;
pub use request::{validate_column_name, PageRequest, QueryContext, SortDirection, Traversal};
pub use value::Value;
