//! Query description and the executor seam
//!
//! The paginator never talks to storage. It describes the rows it wants as a
//! [`Query`] (collection, filter, seek predicate, order, limit) and hands it
//! to a [`QueryExecutor`], which may be a database adapter, the in-memory
//! [`MemoryTable`](crate::memory::MemoryTable), or a test double.

use std::sync::Arc;

use pagewalk_core::{CompareOp, Filter, QueryError, SortDirection};

/// Strict comparison used to seek past a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOp {
    /// `column > key`
    Greater,
    /// `column < key`
    Less,
}

impl SeekOp {
    /// The equivalent filter operator
    pub fn as_compare_op(self) -> CompareOp {
        match self {
            SeekOp::Greater => CompareOp::Gt,
            SeekOp::Less => CompareOp::Lt,
        }
    }
}

/// Seek predicate on the sort column.
///
/// `key` is the decoded cursor value. Executors compare it the way they
/// compare the column (numerically for numeric columns, and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seek {
    /// Sort column
    pub column: String,
    /// Comparison
    pub op: SeekOp,
    /// Decoded cursor value
    pub key: String,
}

/// Ordering clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Column to order by
    pub column: String,
    /// Direction
    pub direction: SortDirection,
}

/// Ordered, filtered, limited read of one collection
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Target collection (table)
    pub collection: String,
    /// Caller filter, always applied
    pub filter: Filter,
    /// Cursor seek, if any
    pub seek: Option<Seek>,
    /// Row order, if any
    pub order: Option<OrderBy>,
    /// Maximum rows to return, if any
    pub limit: Option<usize>,
}

impl Query {
    /// Unfiltered, unordered, unlimited read of `collection`
    pub fn new(collection: impl Into<String>) -> Self {
        Query {
            collection: collection.into(),
            filter: Filter::All,
            seek: None,
            order: None,
            limit: None,
        }
    }

    /// Add a filter; repeated calls are conjoined
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = std::mem::take(&mut self.filter).and(filter);
        self
    }

    /// Set the seek predicate
    pub fn seek(mut self, column: impl Into<String>, op: SeekOp, key: impl Into<String>) -> Self {
        self.seek = Some(Seek {
            column: column.into(),
            op,
            key: key.into(),
        });
        self
    }

    /// Set the order
    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order = Some(OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    /// Set the row limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Row source for pagination.
///
/// Implementations must apply every part of the query: the filter and seek
/// predicates, the order, then the limit. Any failure is reported as a
/// [`QueryError`]; timeouts and cancellation belong here too.
pub trait QueryExecutor<T> {
    /// Run `query` and return the matching rows in order
    fn execute(&self, query: &Query) -> Result<Vec<T>, QueryError>;
}

impl<T, E: QueryExecutor<T> + ?Sized> QueryExecutor<T> for &E {
    fn execute(&self, query: &Query) -> Result<Vec<T>, QueryError> {
        (**self).execute(query)
    }
}

impl<T, E: QueryExecutor<T> + ?Sized> QueryExecutor<T> for Box<E> {
    fn execute(&self, query: &Query) -> Result<Vec<T>, QueryError> {
        (**self).execute(query)
    }
}

impl<T, E: QueryExecutor<T> + ?Sized> QueryExecutor<T> for Arc<E> {
    fn execute(&self, query: &Query) -> Result<Vec<T>, QueryError> {
        (**self).execute(query)
    }
}
