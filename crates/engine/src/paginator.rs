//! Bidirectional cursor pagination
//!
//! ## Query construction
//!
//! | Traversal | Seek (Asc) | Seek (Desc) | Order |
//! |-----------|------------|-------------|-------|
//! | initial | none | none | natural |
//! | forward | `col > v` | `col < v` | natural |
//! | backward | `col < v` | `col > v` | reversed |
//!
//! Every query asks for `limit + 1` rows. The extra row only proves that the
//! traversal can continue and is never returned.
//!
//! Walking backward reads in reversed order so that the limit keeps the rows
//! nearest the cursor; the page is flipped back into natural order before it
//! is returned.
//!
//! ## Continuation flags
//!
//! - `has_next` is the over-fetch result, and only for initial and forward
//!   fetches. On a backward fetch the extra row says earlier rows exist, which
//!   is not folded into either flag.
//! - `has_previous` is true exactly when a backward cursor was supplied.
//!
//! Cursors are taken from the first and last returned items whenever the page
//! is non-empty, including the final page.

use tracing::{debug, warn};

use pagewalk_core::{
    validate_column_name, Cursor, Page, PageRequest, PaginationError, PaginationResult,
    QueryContext, SortDirection, Traversal,
};

use crate::config::PaginationConfig;
use crate::query::{Query, QueryExecutor, SeekOp};

/// Cursor paginator.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    /// Create a paginator with the given limits
    pub fn new(config: PaginationConfig) -> Self {
        Paginator { config }
    }

    /// Active configuration
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Fetch one page.
    ///
    /// # Errors
    ///
    /// - [`PaginationError::InvalidRequest`] for both cursors, a limit of
    ///   zero or above `max_limit`, or a sort column that is not a plain
    ///   identifier
    /// - [`PaginationError::Decode`] if the cursor cannot be decoded
    /// - [`PaginationError::Query`] with the executor's error, untouched
    pub fn fetch_page<T, E>(
        &self,
        executor: &E,
        request: &PageRequest,
        context: &QueryContext<T>,
    ) -> PaginationResult<Page<T>>
    where
        E: QueryExecutor<T> + ?Sized,
    {
        let query = self.build_query(request, context)?;
        let traversal = request.traversal()?;

        debug!(
            target: "pagewalk::paginate",
            collection = context.collection(),
            traversal = traversal.name(),
            column = %request.sort_column,
            direction = %request.direction,
            limit = request.limit,
            "Fetching page"
        );

        let rows = executor.execute(&query)?;
        let fetched = rows.len();
        let page = assemble_page(rows, request.limit, traversal, context);

        debug!(
            target: "pagewalk::paginate",
            fetched,
            returned = page.items.len(),
            has_next = page.has_next,
            has_previous = page.has_previous,
            "Page assembled"
        );
        Ok(page)
    }

    /// Build the query for a page without running it.
    ///
    /// # Errors
    ///
    /// Same request and cursor errors as [`Paginator::fetch_page`].
    pub fn build_query<T>(
        &self,
        request: &PageRequest,
        context: &QueryContext<T>,
    ) -> PaginationResult<Query> {
        let (traversal, fetch_limit) = request
            .traversal()
            .and_then(|traversal| Ok((traversal, self.validate(request)?)))
            .inspect_err(|e| {
                warn!(target: "pagewalk::paginate", error = %e, "Rejected page request");
            })?;

        let column = request.sort_column.as_str();
        let natural = request.direction;
        let query = Query::new(context.collection()).filter(context.filter().clone());

        let query = match traversal {
            Traversal::Initial => query.order_by(column, natural),
            Traversal::Forward(cursor) => {
                let key = decode_cursor(cursor)?;
                query
                    .seek(column, forward_seek(natural), key)
                    .order_by(column, natural)
            }
            Traversal::Backward(cursor) => {
                let key = decode_cursor(cursor)?;
                query
                    .seek(column, backward_seek(natural), key)
                    .order_by(column, natural.reversed())
            }
        };

        Ok(query.limit(fetch_limit))
    }

    /// Check the request and return the over-fetch limit.
    fn validate(&self, request: &PageRequest) -> PaginationResult<usize> {
        if request.limit == 0 {
            return Err(PaginationError::invalid_request("limit must be at least 1"));
        }
        if request.limit > self.config.max_limit {
            return Err(PaginationError::invalid_request(format!(
                "limit {} exceeds maximum of {}",
                request.limit, self.config.max_limit
            )));
        }
        validate_column_name(&request.sort_column)?;
        request.limit.checked_add(1).ok_or_else(|| {
            PaginationError::invalid_request(format!("limit {} is too large", request.limit))
        })
    }
}

fn decode_cursor(cursor: &Cursor) -> PaginationResult<String> {
    cursor.decode().map_err(|e| {
        warn!(target: "pagewalk::paginate", error = %e, "Undecodable cursor");
        PaginationError::from(e)
    })
}

fn forward_seek(direction: SortDirection) -> SeekOp {
    match direction {
        SortDirection::Asc => SeekOp::Greater,
        SortDirection::Desc => SeekOp::Less,
    }
}

fn backward_seek(direction: SortDirection) -> SeekOp {
    match direction {
        SortDirection::Asc => SeekOp::Less,
        SortDirection::Desc => SeekOp::Greater,
    }
}

/// Turn the over-fetched rows into a page.
fn assemble_page<T>(
    mut rows: Vec<T>,
    limit: usize,
    traversal: Traversal<'_>,
    context: &QueryContext<T>,
) -> Page<T> {
    let has_more = rows.len() > limit;
    if has_more {
        rows.truncate(limit);
    }

    let backward = traversal.is_backward();
    if backward {
        rows.reverse();
    }

    let (prev_cursor, next_cursor) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (
            Some(Cursor::encode(&context.sort_key(first))),
            Some(Cursor::encode(&context.sort_key(last))),
        ),
        _ => (None, None),
    };

    Page {
        items: rows,
        next_cursor,
        prev_cursor,
        has_next: has_more && !backward,
        has_previous: backward,
    }
}
