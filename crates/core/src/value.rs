//! Scalar column values
//!
//! [`Value`] is what a record exposes for one column and what filter
//! conditions compare against. Only scalars are modelled; pagination never
//! sorts or filters on nested data.
//!
//! ## Comparison rules
//!
//! - `Int` and `Float` compare numerically with each other
//! - Values of unrelated types order by type rank: `Null < Bool < number < String`
//! - Equality is strict: `Int(1) != Float(1.0)`
//!
//! ## Cursor keys
//!
//! Cursors carry strings. [`Value::coerce_key`] parses such a string into the
//! type of a column value so that `"10"` sorts after `"9"` on an integer
//! column, the way a relational database coerces a bound parameter.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Scalar value of a single column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::String(_) => 3,
        }
    }

    /// Whether two values can be meaningfully ordered against each other.
    pub fn is_comparable_with(&self, other: &Value) -> bool {
        !self.is_null() && !other.is_null() && self.rank() == other.rank()
    }

    /// Total order over all values.
    ///
    /// Floats use `f64::total_cmp`, so NaN sorts after every number.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).total_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.total_cmp(&(*b as f64)),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Parse a cursor key into the type of `self`.
    ///
    /// Returns `None` when the key is not a valid literal of that type.
    /// Integer columns accept fractional keys as floats. Null columns have
    /// no type, so the key stays a string.
    pub fn coerce_key(&self, key: &str) -> Option<Value> {
        match self {
            Value::Int(_) => key
                .parse::<i64>()
                .map(Value::Int)
                .ok()
                .or_else(|| key.parse::<f64>().ok().map(Value::Float)),
            Value::Float(_) => key.parse::<f64>().ok().map(Value::Float),
            Value::Bool(_) => key.parse::<bool>().ok().map(Value::Bool),
            Value::String(_) | Value::Null => Some(Value::String(key.to_string())),
        }
    }
}

/// Canonical string form, the inverse of [`Value::coerce_key`].
///
/// Record types can use it to build cursor keys from column values.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
