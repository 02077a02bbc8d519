//! Page of results
//!
//! Wire field names are part of the client contract:
//!
//! ```json
//! {"items": [...], "next_cursor": "MTA=", "prev_cursor": "OA==", "has_next": false, "has_previous": true}
//! ```
//!
//! `next_cursor` and `prev_cursor` are omitted when absent.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;

/// One page of a cursor traversal.
///
/// `items` is always in natural order, whichever way the page was fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Cursor of the last item; pass as a forward cursor to continue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<Cursor>,
    /// Cursor of the first item; pass as a backward cursor to go back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_cursor: Option<Cursor>,
    /// More rows follow this page
    pub has_next: bool,
    /// The page was reached by walking backward
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Page with no items and no cursors
    pub fn empty() -> Self {
        Page {
            items: Vec::new(),
            next_cursor: None,
            prev_cursor: None,
            has_next: false,
            has_previous: false,
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform the items, keeping cursors and flags
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            prev_cursor: self.prev_cursor,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
