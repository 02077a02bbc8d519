//! pagewalk - bidirectional cursor pagination
//!
//! pagewalk pages through an ordered, filterable record set with opaque
//! cursors. Pages can be walked forward from any item and backward from any
//! item; backward pages come back in the same order a forward walk shows.
//!
//! # Quick Start
//!
//! ```ignore
//! use pagewalk::{MemoryTable, PageRequest, Paginator, QueryContext, SortDirection};
//!
//! let paginator = Paginator::default();
//! let context = QueryContext::new("users", |u: &User| u.id.to_string());
//!
//! // First page
//! let request = PageRequest::new("id", SortDirection::Asc, 20);
//! let page = paginator.fetch_page(&table, &request, &context)?;
//!
//! // Next page
//! if page.has_next {
//!     let cursor = page.next_cursor.clone().unwrap();
//!     let next = paginator.fetch_page(&table, &request.clone().after(cursor), &context)?;
//! }
//! ```
//!
//! # Architecture
//!
//! - `pagewalk-core`: cursor codec, filters, request and page types, errors
//! - `pagewalk-engine`: the [`Paginator`], the [`QueryExecutor`] seam, config
//! - `pagewalk-executor`: HTTP-facing error codes and JSON responses

pub use pagewalk_core::*;
pub use pagewalk_engine::{
    render_sql, ConfigError, MemoryTable, OrderBy, PaginationConfig, Paginator, Query,
    QueryExecutor, Record, Seek, SeekOp, SqlStatement, CONFIG_FILE_NAME,
};
pub use pagewalk_executor::{respond, Error as BoundaryError, ErrorBody, Response};
