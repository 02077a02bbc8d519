//! Known pages over fixed datasets.

use crate::common::*;
use pagewalk::{Filter, SortDirection};

// ============================================================================
// Ascending by id, ids 1..=10, limit 3
// ============================================================================

#[test]
fn first_page_without_cursor() {
    let table = users(10);
    let page = fetch(&table, &request(SortDirection::Asc, 3), &by_id()).unwrap();

    assert_eq!(ids(&page), vec![1, 2, 3]);
    assert_eq!(page.next_cursor, Some(cursor("3")));
    assert_eq!(page.prev_cursor, Some(cursor("1")));
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[test]
fn forward_from_three() {
    let table = users(10);
    let req = request(SortDirection::Asc, 3).after(cursor("3"));
    let page = fetch(&table, &req, &by_id()).unwrap();

    assert_eq!(ids(&page), vec![4, 5, 6]);
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[test]
fn backward_from_four_returns_natural_order() {
    let table = users(10);
    let req = request(SortDirection::Asc, 3).before(cursor("4"));
    let page = fetch(&table, &req, &by_id()).unwrap();

    assert_eq!(ids(&page), vec![1, 2, 3]);
    // Reflects that a backward cursor was used, not whether rows precede id 1.
    assert!(page.has_previous);
    assert!(!page.has_next);
    assert_eq!(page.prev_cursor, Some(cursor("1")));
    assert_eq!(page.next_cursor, Some(cursor("3")));
}

#[test]
fn last_page_still_emits_next_cursor() {
    let table = users(10);
    let req = request(SortDirection::Asc, 3).after(cursor("9"));
    let page = fetch(&table, &req, &by_id()).unwrap();

    assert_eq!(ids(&page), vec![10]);
    assert!(!page.has_next);
    // Current behavior: a cursor past the last item is still handed out.
    assert_eq!(page.next_cursor, Some(cursor("10")));

    let beyond = request(SortDirection::Asc, 3).after(page.next_cursor.unwrap());
    let empty = fetch(&table, &beyond, &by_id()).unwrap();
    assert!(empty.is_empty());
    assert!(empty.next_cursor.is_none());
    assert!(empty.prev_cursor.is_none());
}

#[test]
fn exact_multiple_of_limit_has_no_next_on_last_page() {
    let table = users(9);
    let req = request(SortDirection::Asc, 3).after(cursor("6"));
    let page = fetch(&table, &req, &by_id()).unwrap();

    assert_eq!(ids(&page), vec![7, 8, 9]);
    assert!(!page.has_next);
}

// ============================================================================
// Descending by id
// ============================================================================

#[test]
fn descending_first_page() {
    let table = users(10);
    let page = fetch(&table, &request(SortDirection::Desc, 3), &by_id()).unwrap();

    assert_eq!(ids(&page), vec![10, 9, 8]);
    assert_eq!(page.next_cursor, Some(cursor("8")));
    assert!(page.has_next);
}

#[test]
fn descending_forward_and_backward() {
    let table = users(10);

    let fwd = request(SortDirection::Desc, 3).after(cursor("8"));
    assert_eq!(ids(&fetch(&table, &fwd, &by_id()).unwrap()), vec![7, 6, 5]);

    let back = request(SortDirection::Desc, 3).before(cursor("7"));
    let page = fetch(&table, &back, &by_id()).unwrap();
    assert_eq!(ids(&page), vec![10, 9, 8]);
    assert!(page.has_previous);
}

// ============================================================================
// Other columns and filters
// ============================================================================

#[test]
fn numeric_column_is_not_compared_as_text() {
    // "10" < "9" as text; the integer column must still place 10 after 9.
    let table = users(12);
    let req = request(SortDirection::Asc, 5).after(cursor("9"));
    assert_eq!(ids(&fetch(&table, &req, &by_id()).unwrap()), vec![10, 11, 12]);
}

#[test]
fn string_sort_column() {
    let table = users(10);
    let req = pagewalk::PageRequest::new("name", SortDirection::Asc, 4);
    let page = fetch(&table, &req, &by_name()).unwrap();

    let names: Vec<&str> = page.items.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["ada-005", "alan-001", "barbara-002", "donald-004"]);
    assert_eq!(page.next_cursor, Some(cursor("donald-004")));

    let next = req.clone().after(page.next_cursor.unwrap());
    let page2 = fetch(&table, &next, &by_name()).unwrap();
    let names: Vec<&str> = page2.items.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["edsger-003", "frances-007", "grace-010", "john-006"]);
}

#[test]
fn filter_applies_to_every_traversal() {
    let table = users(10);
    let red = by_id().with_filter(Filter::eq("team", "red"));

    let first = fetch(&table, &request(SortDirection::Asc, 2), &red).unwrap();
    assert_eq!(ids(&first), vec![2, 4]);
    assert!(first.has_next);

    let fwd = request(SortDirection::Asc, 2).after(first.next_cursor.clone().unwrap());
    let second = fetch(&table, &fwd, &red).unwrap();
    assert_eq!(ids(&second), vec![6, 8]);

    let back = request(SortDirection::Asc, 2).before(second.prev_cursor.clone().unwrap());
    assert_eq!(ids(&fetch(&table, &back, &red).unwrap()), vec![2, 4]);
}

#[test]
fn empty_collection() {
    let table = users(0);
    let page = fetch(&table, &request(SortDirection::Asc, 3), &by_id()).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_next);
    assert!(!page.has_previous);
    assert!(page.next_cursor.is_none());
}

#[test]
fn page_serializes_with_wire_names() {
    let table = users(10);
    let page = fetch(&table, &request(SortDirection::Asc, 1), &by_id()).unwrap();
    let value = serde_json::to_value(&page).unwrap();

    assert_eq!(value["next_cursor"], serde_json::json!("MQ=="));
    assert_eq!(value["prev_cursor"], serde_json::json!("MQ=="));
    assert_eq!(value["has_next"], serde_json::json!(true));
    assert_eq!(value["has_previous"], serde_json::json!(false));
    assert_eq!(value["items"][0]["id"], serde_json::json!(1));
}
