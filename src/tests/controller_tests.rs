// src/tests/controller_tests.rs

use super::utils::{ids, listing};
use crate::controller::{ControllerState, FilterChange, PageDelta, ResultSetController};
use crate::domain::{normalize_response, SortKey, StructuredFilters};
use crate::errors::SearchError;
use serde_json::json;

fn loaded(listings: Vec<crate::domain::Listing>, page_size: usize) -> ResultSetController {
    let mut c = ResultSetController::new(page_size);
    let t = c.begin_search();
    c.on_search_complete(t, listings);
    c
}

#[test]
fn price_ascending_scenario() {
    let data = json!({ "props": [
        { "id": "office", "price": 15000000, "livingArea": 25000, "propertyType": "Office" },
        { "id": "retail", "price": 8500000, "livingArea": 35000, "propertyType": "Retail" },
    ]});

    let mut c = loaded(normalize_response(&data), 9);
    let view = c.on_sort_change(SortKey::PriceAsc);

    assert_eq!(ids(&view.listings), vec!["retail", "office"]);
    assert_eq!(view.listings[0].price, Some(8_500_000));
    assert_eq!(view.listings[1].price, Some(15_000_000));
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.page_index, 1);
}

#[test]
fn warehouse_filter_scenario() {
    let data = json!({ "props": [
        { "id": "a", "title": "Dock Plaza", "description": "Modern Warehouse, 24ft clear", "propertyType": "Industrial" },
        { "id": "b", "title": "Tower One", "description": "Class A offices", "propertyType": "Office" },
        { "id": "c", "title": "Corner Shop", "description": "Retail frontage", "propertyType": "Retail" },
    ]});

    let mut c = loaded(normalize_response(&data), 9);
    let view = c.on_filter_change(FilterChange::text("warehouse"));

    assert_eq!(ids(&view.listings), vec!["a"]);
    assert_eq!(view.filtered_count, 1);
    assert_eq!(view.total_count, 3);
}

#[test]
fn zero_and_unknown_prices_stay_out_of_stats() {
    let data = json!({ "props": [
        { "id": "zero", "price": 0 },
        { "id": "absent" },
        { "id": "priced", "price": 500000 },
    ]});

    let c = loaded(normalize_response(&data), 9);
    let stats = c.view().stats;

    assert_eq!(stats.count, 3);
    assert_eq!(stats.priced_count, 1);
    assert_eq!(stats.average_price, Some(500_000));
    assert_eq!(stats.min_price, Some(500_000));
    assert_eq!(stats.max_price, Some(500_000));
}

#[test]
fn navigation_past_last_page_is_a_no_op() {
    let listings = (0..15)
        .map(|i| listing(&format!("l{i}"), Some(i + 1), None, "Office"))
        .collect();
    let mut c = loaded(listings, 9);

    assert_eq!(c.on_page_change(PageDelta::Next).page_index, 2);
    let view = c.on_page_change(PageDelta::Next);
    assert_eq!(view.page_index, 2);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.listings.len(), 6);
    assert_eq!(c.view_state().page_index, 2);
}

#[test]
fn navigation_never_leaves_range() {
    let listings: Vec<_> = (0..40u64)
        .map(|i| {
            let kind = if i % 3 == 0 { "Retail" } else { "Office" };
            listing(&format!("l{i}"), Some(i * 1000), Some(i * 10), kind)
        })
        .collect();
    let mut c = loaded(listings, 7);

    let deltas = [
        PageDelta::Next,
        PageDelta::Next,
        PageDelta::Next,
        PageDelta::Previous,
        PageDelta::Next,
        PageDelta::Next,
        PageDelta::Next,
        PageDelta::Next,
        PageDelta::Next,
        PageDelta::Previous,
        PageDelta::Previous,
    ];

    for (step, delta) in deltas.iter().cycle().take(60).enumerate() {
        if step % 13 == 0 {
            c.on_filter_change(FilterChange::text(if step % 2 == 0 { "retail" } else { "" }));
        }
        let view = c.on_page_change(*delta);
        assert!(view.page_index >= 1);
        assert!(view.page_index <= view.total_pages);
    }
}

#[test]
fn view_changes_reset_page_to_one() {
    let listings = (0..30)
        .map(|i| listing(&format!("l{i}"), Some(i + 1), Some(i + 1), "Office"))
        .collect();
    let mut c = loaded(listings, 9);

    c.on_page_change(PageDelta::Next);
    c.on_page_change(PageDelta::Next);
    assert_eq!(c.view_state().page_index, 3);

    assert_eq!(c.on_sort_change(SortKey::PriceDesc).page_index, 1);

    c.on_page_change(PageDelta::Next);
    let view = c.on_filter_change(FilterChange::structured(StructuredFilters {
        min_price: Some(2),
        ..Default::default()
    }));
    assert_eq!(view.page_index, 1);
    assert_eq!(view.filtered_count, 29);

    c.on_page_change(PageDelta::Next);
    let t = c.begin_search();
    let view = c.on_search_complete(t, vec![listing("x", Some(5), None, "Office")]);
    assert_eq!(view.page_index, 1);
    assert_eq!(ids(&view.listings), vec!["x"]);
}

#[test]
fn stale_completion_is_discarded() {
    let mut c = ResultSetController::new(9);
    let first = c.begin_search();
    let second = c.begin_search();

    c.on_search_complete(second, vec![listing("new", Some(1), None, "Office")]);
    let view = c.on_search_complete(first, vec![listing("old", Some(1), None, "Office")]);

    assert_eq!(ids(&view.listings), vec!["new"]);
    assert!(!c.is_searching());
}

#[test]
fn stale_arriving_first_does_not_clear_busy_flag() {
    let mut c = ResultSetController::new(9);
    let first = c.begin_search();
    let second = c.begin_search();

    c.on_search_complete(first, vec![listing("old", Some(1), None, "Office")]);
    assert!(c.is_searching());
    assert_eq!(c.state(), &ControllerState::Idle);

    c.on_search_complete(second, vec![]);
    assert!(!c.is_searching());
    assert!(matches!(c.state(), ControllerState::Loaded(set) if set.is_empty()));
}

#[test]
fn failure_keeps_previous_view() {
    let mut c = loaded(
        vec![
            listing("a", Some(1), None, "Office"),
            listing("b", Some(2), None, "Retail"),
        ],
        9,
    );
    c.on_sort_change(SortKey::PriceDesc);
    let before = c.view();

    let t = c.begin_search();
    assert!(c.is_searching());
    let after = c.on_search_failed(t, SearchError::Network("connection reset".into()));

    assert_eq!(before, after);
    assert!(!c.is_searching());
    assert_eq!(c.view_state().sort_key, SortKey::PriceDesc);
    assert_eq!(
        c.last_error(),
        Some(&SearchError::Network("connection reset".into()))
    );

    // the next good search clears the message
    let t = c.begin_search();
    c.on_search_complete(t, vec![]);
    assert_eq!(c.last_error(), None);
}

#[test]
fn filter_sort_paginate_is_deterministic() {
    let listings: Vec<_> = (0..50u64)
        .map(|i| {
            let price = if i % 7 == 0 { None } else { Some((i * 31) % 17 * 1000) };
            listing(&format!("l{i}"), price, Some((i * 13) % 5 * 100), "Office")
        })
        .collect();
    let mut c = loaded(listings, 6);

    for key in SortKey::ALL {
        c.on_sort_change(key);
        c.on_page_change(PageDelta::Next);
        assert_eq!(c.view(), c.view());
    }
}
