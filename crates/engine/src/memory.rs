//! In-memory query executor
//!
//! [`MemoryTable`] is a single named collection of rows held in memory. It
//! implements [`QueryExecutor`] with the same semantics a relational backend
//! would give a paginated query:
//!
//! - filter and seek conditions on a missing or null column are false
//! - the seek key is coerced to the column's type before comparing
//! - sorting is stable; missing sort values sort as null (first ascending)
//! - the limit is applied last
//!
//! Rows sit behind a `parking_lot::RwLock`, so a table shared through an
//! `Arc` serves concurrent page fetches while writers append rows.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use pagewalk_core::{QueryError, Value};

use crate::query::{Query, QueryExecutor, Seek};

/// Column access for rows stored in a [`MemoryTable`]
pub trait Record {
    /// Value of `column`, or `None` if the row has no such column
    fn field(&self, column: &str) -> Option<Value>;
}

impl Record for HashMap<String, Value> {
    fn field(&self, column: &str) -> Option<Value> {
        self.get(column).cloned()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, column: &str) -> Option<Value> {
        self.get(column).cloned()
    }
}

/// Named in-memory collection
#[derive(Debug)]
pub struct MemoryTable<T> {
    name: String,
    rows: RwLock<Vec<T>>,
    failure: RwLock<Option<String>>,
}

impl<T> MemoryTable<T> {
    /// Empty table called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_rows(name, Vec::new())
    }

    /// Table called `name` holding `rows` in insertion order
    pub fn from_rows(name: impl Into<String>, rows: Vec<T>) -> Self {
        MemoryTable {
            name: name.into(),
            rows: RwLock::new(rows),
            failure: RwLock::new(None),
        }
    }

    /// Collection name queries must target
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a row
    pub fn insert(&self, row: T) {
        self.rows.write().push(row);
    }

    /// Append many rows
    pub fn extend(&self, rows: impl IntoIterator<Item = T>) {
        self.rows.write().extend(rows);
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Make every query fail with `message` until [`MemoryTable::clear_failure`]
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write() = Some(message.into());
    }

    /// Stop failing queries
    pub fn clear_failure(&self) {
        *self.failure.write() = None;
    }
}

impl<T: Record + Clone> MemoryTable<T> {
    fn seek_matches(row: &T, seek: &Seek) -> Result<bool, QueryError> {
        let actual = match row.field(&seek.column) {
            Some(v) if !v.is_null() => v,
            _ => return Ok(false),
        };
        let key = actual.coerce_key(&seek.key).ok_or_else(|| {
            QueryError::new(format!(
                "cannot compare {} column '{}' with cursor key '{}'",
                actual.type_name(),
                seek.column,
                seek.key
            ))
        })?;
        Ok(seek.op.as_compare_op().holds(actual.total_cmp(&key)))
    }
}

impl<T: Record + Clone> QueryExecutor<T> for MemoryTable<T> {
    fn execute(&self, query: &Query) -> Result<Vec<T>, QueryError> {
        if let Some(message) = self.failure.read().as_ref() {
            return Err(QueryError::new(message.clone()));
        }
        if query.collection != self.name {
            return Err(QueryError::new(format!(
                "no such collection: {}",
                query.collection
            )));
        }

        let mut out = Vec::new();
        for row in self.rows.read().iter() {
            if !query.filter.matches(&|column: &str| row.field(column)) {
                continue;
            }
            if let Some(seek) = &query.seek {
                if !Self::seek_matches(row, seek)? {
                    continue;
                }
            }
            out.push(row.clone());
        }

        if let Some(order) = &query.order {
            let mut keyed: Vec<(Value, T)> = out
                .into_iter()
                .map(|row| (row.field(&order.column).unwrap_or(Value::Null), row))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| {
                let ord = a.total_cmp(b);
                if order.direction.is_ascending() {
                    ord
                } else {
                    ord.reverse()
                }
            });
            out = keyed.into_iter().map(|(_, row)| row).collect();
        }

        if let Some(limit) = query.limit {
            out.truncate(limit);
        }
        Ok(out)
    }
}
