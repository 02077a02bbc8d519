//! Rejected requests and failure propagation.

use crate::common::*;
use pagewalk::{
    respond, BoundaryError, Cursor, DecodeError, PageRequest, PaginationConfig, PaginationError,
    Paginator, SortDirection,
};

#[test]
fn malformed_cursor_is_decode_error() {
    let table = users(10);
    let req = request(SortDirection::Asc, 3).after(Cursor::from_token("%%not base64%%"));
    match fetch(&table, &req, &by_id()) {
        Err(PaginationError::Decode(DecodeError::Malformed { .. })) => {}
        other => panic!("Expected Decode error, got {:?}", other),
    }
}

#[test]
fn non_utf8_cursor_is_decode_error() {
    let table = users(10);
    let req = request(SortDirection::Asc, 3).before(Cursor::encode_bytes(&[0xc3, 0x28]));
    let err = fetch(&table, &req, &by_id()).unwrap_err();
    assert!(matches!(err, PaginationError::Decode(DecodeError::NotUtf8 { .. })));
    assert!(err.is_client_error());
}

#[test]
fn both_cursors_are_rejected() {
    let table = users(10);
    let req = request(SortDirection::Asc, 3)
        .after(cursor("3"))
        .before(cursor("7"));
    let err = fetch(&table, &req, &by_id()).unwrap_err();
    assert!(matches!(err, PaginationError::InvalidRequest { .. }));
    assert_eq!(BoundaryError::from(err).status(), 400);
}

#[test]
fn zero_limit_is_rejected() {
    let table = users(10);
    let err = fetch(&table, &request(SortDirection::Asc, 0), &by_id()).unwrap_err();
    assert!(matches!(err, PaginationError::InvalidRequest { .. }));
}

#[test]
fn configured_max_limit_is_enforced() {
    let table = users(10);
    let paginator = Paginator::new(PaginationConfig {
        default_limit: 2,
        max_limit: 4,
    });
    let ok = paginator.fetch_page(&table, &request(SortDirection::Asc, 4), &by_id());
    assert_eq!(ok.unwrap().len(), 4);
    let err = paginator
        .fetch_page(&table, &request(SortDirection::Asc, 5), &by_id())
        .unwrap_err();
    assert!(err.to_string().contains("exceeds maximum"));
}

#[test]
fn unsafe_sort_column_is_rejected() {
    let table = users(10);
    let req = PageRequest::new("id) OR (1=1", SortDirection::Asc, 3);
    let err = fetch(&table, &req, &by_id()).unwrap_err();
    assert!(matches!(err, PaginationError::InvalidRequest { .. }));
}

#[test]
fn executor_failure_passes_through() {
    let table = users(10);
    table.fail_with("too many connections");
    match fetch(&table, &request(SortDirection::Asc, 3), &by_id()) {
        Err(PaginationError::Query(e)) => assert_eq!(e.message(), "too many connections"),
        other => panic!("Expected Query error, got {:?}", other),
    }
}

#[test]
fn cursor_key_of_wrong_type_surfaces_as_query_error() {
    // Decodes fine, but the executor cannot compare "abc" with an integer column.
    let table = users(10);
    let req = request(SortDirection::Asc, 3).after(cursor("abc"));
    let err = fetch(&table, &req, &by_id()).unwrap_err();
    assert!(matches!(err, PaginationError::Query(_)));
    assert!(!err.is_client_error());
}

#[test]
fn errors_render_with_envelope() {
    let table = users(10);
    let req = request(SortDirection::Asc, 3).after(Cursor::from_token("!"));
    let response = respond(fetch(&table, &req, &by_id()));
    assert_eq!(response.status, 400);
    assert_eq!(response.body["type"], serde_json::json!("error"));
    assert_eq!(response.body["code"], serde_json::json!("invalid_cursor"));
}
