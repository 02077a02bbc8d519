//! Page requests and query context
//!
//! A [`PageRequest`] says *where* to read (limit, cursor, sort column and
//! direction). A [`QueryContext`] says *what* to read (collection, filter)
//! and how to turn a returned row back into a cursor key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cursor::Cursor;
use crate::error::{PaginationError, PaginationResult};
use crate::filter::Filter;

/// Sort direction of the pagination column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (smallest first)
    #[default]
    Asc,
    /// Descending order (largest first)
    Desc,
}

impl SortDirection {
    /// Build from the common `ascending: bool` flag
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    /// Return the opposite sort direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Whether this is ascending order
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }

    /// SQL keyword
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Validate that a column name is a plain, optionally qualified identifier.
///
/// Accepts names matching `[A-Za-z_][A-Za-z0-9_.]*`.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidRequest`] for anything else.
pub fn validate_column_name(name: &str) -> PaginationResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(PaginationError::invalid_request(format!(
            "invalid column name '{}'",
            name
        )))
    }
}

/// Pagination parameters for one page fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of items on the page (at least 1)
    pub limit: usize,
    /// Resume after this cursor (walk forward)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_cursor: Option<Cursor>,
    /// Resume before this cursor (walk backward)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backward_cursor: Option<Cursor>,
    /// Column the pages are ordered and sought by
    pub sort_column: String,
    /// Natural order of the traversal
    #[serde(default)]
    pub direction: SortDirection,
}

impl PageRequest {
    /// First page of `sort_column` in `direction`
    pub fn new(sort_column: impl Into<String>, direction: SortDirection, limit: usize) -> Self {
        PageRequest {
            limit,
            forward_cursor: None,
            backward_cursor: None,
            sort_column: sort_column.into(),
            direction,
        }
    }

    /// Continue forward, after `cursor`
    pub fn after(mut self, cursor: Cursor) -> Self {
        self.forward_cursor = Some(cursor);
        self
    }

    /// Continue backward, before `cursor`
    pub fn before(mut self, cursor: Cursor) -> Self {
        self.backward_cursor = Some(cursor);
        self
    }

    /// Which way this request walks.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidRequest`] if both cursors are set;
    /// the combination has no defined meaning.
    pub fn traversal(&self) -> PaginationResult<Traversal<'_>> {
        match (&self.forward_cursor, &self.backward_cursor) {
            (None, None) => Ok(Traversal::Initial),
            (Some(c), None) => Ok(Traversal::Forward(c)),
            (None, Some(c)) => Ok(Traversal::Backward(c)),
            (Some(_), Some(_)) => Err(PaginationError::invalid_request(
                "forward and backward cursors are mutually exclusive",
            )),
        }
    }
}

/// Traversal mode derived from a [`PageRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal<'a> {
    /// No cursor: first page in natural order
    Initial,
    /// Rows strictly after the cursor in natural order
    Forward(&'a Cursor),
    /// Rows strictly before the cursor in natural order
    Backward(&'a Cursor),
}

impl Traversal<'_> {
    /// Short label used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Traversal::Initial => "initial",
            Traversal::Forward(_) => "forward",
            Traversal::Backward(_) => "backward",
        }
    }

    /// Whether this walks against natural order
    pub fn is_backward(&self) -> bool {
        matches!(self, Traversal::Backward(_))
    }
}

type SortKeyFn<T> = dyn Fn(&T) -> String + Send + Sync;

/// What to paginate, and how to key the rows that come back
pub struct QueryContext<T> {
    collection: String,
    filter: Filter,
    sort_key: Box<SortKeyFn<T>>,
}

impl<T> QueryContext<T> {
    /// Context over `collection` with no filter.
    ///
    /// `sort_key` must return a row's value in the sort column, as the
    /// executor would compare it.
    pub fn new<F>(collection: impl Into<String>, sort_key: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        QueryContext {
            collection: collection.into(),
            filter: Filter::All,
            sort_key: Box::new(sort_key),
        }
    }

    /// Restrict the rows with `filter`
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Target collection
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Caller-supplied filter
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Cursor key of `item`
    pub fn sort_key(&self, item: &T) -> String {
        (self.sort_key)(item)
    }
}

impl<T> fmt::Debug for QueryContext<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext")
            .field("collection", &self.collection)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
