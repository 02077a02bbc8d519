//! Shared paginator and executor across threads.

use std::sync::Arc;
use std::thread;

use crate::common::*;
use pagewalk::{Paginator, SortDirection};

#[test]
fn concurrent_fetches_see_consistent_pages() {
    init_tracing();
    let table = Arc::new(users(50));
    let paginator = Arc::new(Paginator::default());

    let handles: Vec<_> = (0..8i64)
        .map(|t| {
            let table = Arc::clone(&table);
            let paginator = Arc::clone(&paginator);
            thread::spawn(move || {
                let start = t * 5;
                let req = request(SortDirection::Asc, 5).after(cursor(&start.to_string()));
                let page = paginator.fetch_page(&*table, &req, &by_id()).unwrap();
                (start, ids(&page))
            })
        })
        .collect();

    for handle in handles {
        let (start, got) = handle.join().unwrap();
        let expected: Vec<i64> = (start + 1..=start + 5).collect();
        assert_eq!(got, expected);
    }
}

#[test]
fn reads_during_inserts_stay_bounded_and_ordered() {
    init_tracing();
    let table = Arc::new(users(10));
    let writer = {
        let table = Arc::clone(&table);
        thread::spawn(move || {
            for id in 11..=200 {
                table.insert(User {
                    id,
                    name: format!("late-{:03}", id),
                    team: "blue",
                });
            }
        })
    };

    let paginator = Paginator::default();
    for _ in 0..50 {
        let page = paginator
            .fetch_page(&*table, &request(SortDirection::Desc, 7), &by_id())
            .unwrap();
        let got = ids(&page);
        assert!(got.len() <= 7);
        assert!(got.windows(2).all(|w| w[0] > w[1]));
    }
    writer.join().unwrap();
    assert_eq!(table.len(), 200);
}
