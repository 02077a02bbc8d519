//! Typed filter predicates
//!
//! A [`Filter`] is a small condition tree handed to the query executor. It
//! keeps callers away from raw query fragments: executors either evaluate it
//! directly ([`Filter::matches`]) or translate it into their own query
//! language.
//!
//! Comparisons follow SQL semantics for missing data: a condition on an
//! absent or null column is false (only [`Filter::IsNull`] matches it).
//!
//! ```
//! use pagewalk_core::Filter;
//!
//! let filter = Filter::eq("status", "active").and(Filter::ge("age", 18));
//! assert_eq!(filter.columns(), vec!["status", "age"]);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::value::Value;

/// Comparison operator of a single condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CompareOp {
    /// Whether `ordering` (column value vs. operand) satisfies this operator
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }

    /// SQL spelling of the operator
    pub fn as_sql(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// Composable condition tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Matches every row
    #[default]
    All,
    /// `column <op> value`
    Compare {
        /// Column name
        column: String,
        /// Operator
        op: CompareOp,
        /// Right-hand operand
        value: Value,
    },
    /// `column IN (values...)`
    In {
        /// Column name
        column: String,
        /// Accepted values
        values: Vec<Value>,
    },
    /// `column IS NULL` (also true when the column is absent)
    IsNull {
        /// Column name
        column: String,
    },
    /// Every child matches
    And(Vec<Filter>),
    /// At least one child matches
    Or(Vec<Filter>),
    /// Child does not match
    Not(Box<Filter>),
}

impl Filter {
    /// Filter that matches everything
    pub fn all() -> Self {
        Filter::All
    }

    /// Build a comparison condition
    pub fn compare(column: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Filter::Compare {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// `column = value`
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Eq, value)
    }

    /// `column <> value`
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Ne, value)
    }

    /// `column < value`
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Lt, value)
    }

    /// `column <= value`
    pub fn le(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Le, value)
    }

    /// `column > value`
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Gt, value)
    }

    /// `column >= value`
    pub fn ge(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, CompareOp::Ge, value)
    }

    /// `column IN (values...)`
    pub fn in_list<V: Into<Value>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Filter::In {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `column IS NULL`
    pub fn is_null(column: impl Into<String>) -> Self {
        Filter::IsNull {
            column: column.into(),
        }
    }

    /// Conjunction, flattening nested `And`s and dropping `All`
    pub fn and(self, other: Filter) -> Self {
        match (self, other) {
            (Filter::All, f) | (f, Filter::All) => f,
            (Filter::And(mut a), Filter::And(b)) => {
                a.extend(b);
                Filter::And(a)
            }
            (Filter::And(mut a), f) => {
                a.push(f);
                Filter::And(a)
            }
            (f, Filter::And(mut b)) => {
                b.insert(0, f);
                Filter::And(b)
            }
            (a, b) => Filter::And(vec![a, b]),
        }
    }

    /// Disjunction, flattening nested `Or`s
    pub fn or(self, other: Filter) -> Self {
        match (self, other) {
            (Filter::All, _) | (_, Filter::All) => Filter::All,
            (Filter::Or(mut a), Filter::Or(b)) => {
                a.extend(b);
                Filter::Or(a)
            }
            (Filter::Or(mut a), f) => {
                a.push(f);
                Filter::Or(a)
            }
            (a, b) => Filter::Or(vec![a, b]),
        }
    }

    /// Negation
    pub fn negate(self) -> Self {
        match self {
            Filter::Not(inner) => *inner,
            f => Filter::Not(Box::new(f)),
        }
    }

    /// Whether this filter matches every row
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// Column names referenced by the filter, in first-seen order
    pub fn columns(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_columns(&mut out);
        out
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Filter::All => {}
            Filter::Compare { column, .. }
            | Filter::In { column, .. }
            | Filter::IsNull { column } => {
                if !out.contains(&column.as_str()) {
                    out.push(column);
                }
            }
            Filter::And(children) | Filter::Or(children) => {
                for child in children {
                    child.collect_columns(out);
                }
            }
            Filter::Not(inner) => inner.collect_columns(out),
        }
    }

    /// Evaluate against a row, given a column lookup.
    ///
    /// `lookup` returns `None` for columns the row does not have.
    pub fn matches<F>(&self, lookup: &F) -> bool
    where
        F: Fn(&str) -> Option<Value> + ?Sized,
    {
        match self {
            Filter::All => true,
            Filter::Compare { column, op, value } => match lookup(column) {
                Some(actual) if actual.is_comparable_with(value) => {
                    op.holds(actual.total_cmp(value))
                }
                _ => false,
            },
            Filter::In { column, values } => match lookup(column) {
                Some(actual) if !actual.is_null() => values.iter().any(|v| {
                    actual.is_comparable_with(v) && actual.total_cmp(v) == Ordering::Equal
                }),
                _ => false,
            },
            Filter::IsNull { column } => lookup(column).map_or(true, |v| v.is_null()),
            Filter::And(children) => children.iter().all(|c| c.matches(lookup)),
            Filter::Or(children) => children.iter().any(|c| c.matches(lookup)),
            Filter::Not(inner) => !inner.matches(lookup),
        }
    }
}

impl std::ops::Not for Filter {
    type Output = Filter;

    fn not(self) -> Filter {
        self.negate()
    }
}
