//! SQL rendering of pagination queries
//!
//! Relational executors can turn a [`Query`] into a parameterized statement
//! instead of walking the filter tree themselves:
//!
//! ```text
//! SELECT * FROM "users" WHERE ("active" = ?) AND "id" > ? ORDER BY "id" ASC LIMIT ?
//! ```
//!
//! Identifiers are validated and double-quoted; every value, including the
//! cursor key and the limit, is bound through a `?` placeholder.

use tracing::trace;

use pagewalk_core::{validate_column_name, Filter, PaginationResult, Value};

use crate::query::Query;

/// Statement text plus positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    /// SQL with `?` placeholders
    pub sql: String,
    /// Parameters in placeholder order
    pub params: Vec<Value>,
}

/// Quote an identifier, part by part for qualified names.
fn quote_identifier(name: &str) -> String {
    name.split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}

fn render_filter(filter: &Filter, params: &mut Vec<Value>) -> PaginationResult<String> {
    Ok(match filter {
        Filter::All => "1 = 1".to_string(),
        Filter::Compare { column, op, value } => {
            validate_column_name(column)?;
            params.push(value.clone());
            format!("{} {} ?", quote_identifier(column), op.as_sql())
        }
        Filter::In { column, values } => {
            validate_column_name(column)?;
            if values.is_empty() {
                "1 = 0".to_string()
            } else {
                params.extend(values.iter().cloned());
                let marks = vec!["?"; values.len()].join(", ");
                format!("{} IN ({})", quote_identifier(column), marks)
            }
        }
        Filter::IsNull { column } => {
            validate_column_name(column)?;
            format!("{} IS NULL", quote_identifier(column))
        }
        Filter::And(children) => render_group(children, " AND ", "1 = 1", params)?,
        Filter::Or(children) => render_group(children, " OR ", "1 = 0", params)?,
        Filter::Not(inner) => format!("NOT ({})", render_filter(inner, params)?),
    })
}

fn render_group(
    children: &[Filter],
    joiner: &str,
    empty: &str,
    params: &mut Vec<Value>,
) -> PaginationResult<String> {
    if children.is_empty() {
        return Ok(empty.to_string());
    }
    let parts = children
        .iter()
        .map(|c| render_filter(c, params).map(|s| format!("({})", s)))
        .collect::<PaginationResult<Vec<_>>>()?;
    Ok(parts.join(joiner))
}

/// Render `query` as a parameterized `SELECT`.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidRequest`](pagewalk_core::PaginationError)
/// if the collection or any column is not a plain identifier.
pub fn render(query: &Query) -> PaginationResult<SqlStatement> {
    validate_column_name(&query.collection)?;

    let mut params = Vec::new();
    let mut conditions = Vec::new();

    if !query.filter.is_all() {
        conditions.push(format!("({})", render_filter(&query.filter, &mut params)?));
    }
    if let Some(seek) = &query.seek {
        validate_column_name(&seek.column)?;
        params.push(Value::String(seek.key.clone()));
        conditions.push(format!(
            "{} {} ?",
            quote_identifier(&seek.column),
            seek.op.as_compare_op().as_sql()
        ));
    }

    let mut sql = format!("SELECT * FROM {}", quote_identifier(&query.collection));
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    if let Some(order) = &query.order {
        validate_column_name(&order.column)?;
        sql.push_str(&format!(
            " ORDER BY {} {}",
            quote_identifier(&order.column),
            order.direction.as_sql()
        ));
    }
    if let Some(limit) = query.limit {
        sql.push_str(" LIMIT ?");
        params.push(Value::Int(i64::try_from(limit).unwrap_or(i64::MAX)));
    }

    trace!(target: "pagewalk::sql", sql = %sql, params = params.len(), "Rendered query");
    Ok(SqlStatement { sql, params })
}
