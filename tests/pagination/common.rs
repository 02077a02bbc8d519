//! Shared fixtures for the pagination suite.

#![allow(dead_code)]

use std::sync::Once;

use pagewalk::{
    Cursor, MemoryTable, Page, PageRequest, Paginator, PaginationResult, QueryContext, Record,
    SortDirection, Value,
};
use serde::Serialize;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (honours `RUST_LOG`).
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Row used by every test in the suite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub team: &'static str,
}

impl Record for User {
    fn field(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(Value::Int(self.id)),
            "name" => Some(Value::from(self.name.as_str())),
            "team" => Some(Value::from(self.team)),
            _ => None,
        }
    }
}

const NAMES: [&str; 10] = [
    "grace", "alan", "barbara", "edsger", "donald", "ada", "john", "frances", "ken", "leslie",
];

/// Users `1..=n`, inserted in a scrambled order so that the executor has to
/// sort. Even ids are on team "red", odd ids on "blue".
pub fn users(n: i64) -> MemoryTable<User> {
    let mut rows: Vec<User> = (1..=n)
        .map(|id| User {
            id,
            name: format!("{}-{:03}", NAMES[(id as usize) % NAMES.len()], id),
            team: if id % 2 == 0 { "red" } else { "blue" },
        })
        .collect();
    rows.reverse();
    rows.rotate_left((n / 3) as usize);
    MemoryTable::from_rows("users", rows)
}

/// Context keyed by `id`.
pub fn by_id() -> QueryContext<User> {
    QueryContext::new("users", |u: &User| u.id.to_string())
}

/// Context keyed by `name`.
pub fn by_name() -> QueryContext<User> {
    QueryContext::new("users", |u: &User| u.name.clone())
}

pub fn request(direction: SortDirection, limit: usize) -> PageRequest {
    PageRequest::new("id", direction, limit)
}

pub fn fetch(
    table: &MemoryTable<User>,
    request: &PageRequest,
    context: &QueryContext<User>,
) -> PaginationResult<Page<User>> {
    init_tracing();
    Paginator::default().fetch_page(table, request, context)
}

pub fn ids(page: &Page<User>) -> Vec<i64> {
    page.items.iter().map(|u| u.id).collect()
}

pub fn cursor(value: &str) -> Cursor {
    Cursor::encode(value)
}
