#![allow(unused)]
//! View derivation integration harness.
//!
//! # What this covers
//!
//! The derivation functions are the core of fbhub: every pane is a pure
//! function of the store's records, and subtle ordering or windowing bugs
//! are hard to catch by inspection alone.
//!
//! - **Filter conjunction**: a record survives filtering iff it satisfies
//!   every active criterion at once. Verified against hand-built corpora and
//!   with proptest over random filter combinations.
//! - **Filter subset property**: filtered output is always a subset of the
//!   input, and an empty filter is the identity.
//! - **Recency ordering**: sorting is descending by timestamp and stable, so
//!   equal-timestamp records keep their insertion order.
//! - **Recent slice**: `recent(records, n)` equals the first `n` of the
//!   sorted view, for any `n` including 0 and n > len.
//! - **Stats partition**: `given + received == total`, and `this_week` counts
//!   strictly-newer-than-seven-days records only.
//! - **Category digest**: distinct tags, first-appearance order, no
//!   duplicates.
//!
//! # What this does NOT cover
//!
//! - Widget rendering of the derived lists (unit-tested in fbhub-tui)
//! - Draft validation (see draft_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test view_harness
//! ```

mod common;
use common::*;

use chrono::{Duration, TimeZone, Utc};
use fbhub_core::{view, Direction, FeedbackFilter, FeedbackRecord};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn combined_filters_are_conjunctive() {
    let now = Utc::now();
    let records = seed_corpus(now);
    let f = FeedbackFilter {
        direction: Some(Direction::Given),
        category: Some("innovation".to_string()),
        search: "api".to_string(),
    };
    // Records 2 and 4 are given; both carry "innovation"; only 2 mentions
    // the API.
    assert_ids!(view::filter(&records, &f), ["2"]);
}

#[test]
fn search_matches_counterpart_names_case_insensitively() {
    let now = Utc::now();
    let records = seed_corpus(now);
    let f = FeedbackFilter {
        search: "sarah".to_string(),
        ..Default::default()
    };
    assert_ids!(view::filter(&records, &f), ["1"]);
}

#[test]
fn search_does_not_match_missing_counterpart() {
    let now = Utc::now();
    let records = seed_corpus(now);
    // Record 3 has no counterpart; its display label "Anonymous" is not
    // searchable text.
    let f = FeedbackFilter {
        search: "anonymous".to_string(),
        ..Default::default()
    };
    assert!(view::filter(&records, &f).is_empty());
}

#[test]
fn tightening_a_filter_never_adds_results() {
    let now = Utc::now();
    let records = build_corpus(40, now);

    let loose = FeedbackFilter {
        direction: Some(Direction::Given),
        ..Default::default()
    };
    let tight = FeedbackFilter {
        direction: Some(Direction::Given),
        category: Some("teamwork".to_string()),
        ..Default::default()
    };

    let loose_ids: Vec<&str> = view::filter(&records, &loose)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    for r in view::filter(&records, &tight) {
        assert!(loose_ids.contains(&r.id.as_str()));
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn sort_is_descending_by_timestamp() {
    let now = Utc::now();
    let records = build_corpus(25, now);
    let sorted = view::sort_by_recency(&records);
    assert_recency_order!(sorted);
}

#[test]
fn sort_is_stable_for_equal_timestamps() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let records = vec![
        RecordBuilder::new("first").ts(ts).build(),
        RecordBuilder::new("second").ts(ts).build(),
        RecordBuilder::new("third").ts(ts).build(),
    ];
    assert_ids!(view::sort_by_recency(&records), ["first", "second", "third"]);
}

#[test]
fn recent_is_a_prefix_of_the_sorted_view() {
    let now = Utc::now();
    let records = build_corpus(12, now);
    let sorted: Vec<&str> = view::sort_by_recency(&records)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    let recent: Vec<&str> = view::recent(&records, 3)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(recent, &sorted[..3]);
}

#[test]
fn recent_degenerates_gracefully() {
    let now = Utc::now();
    let records = seed_corpus(now);
    assert!(view::recent(&records, 0).is_empty());
    assert_eq!(view::recent(&records, 100).len(), records.len());
    assert!(view::recent(&[], 3).is_empty());
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[test]
fn stats_partition_by_direction() {
    let now = Utc::now();
    let records = seed_corpus(now);
    let stats = view::compute_stats(&records, now);
    assert_eq!(stats.given + stats.received, records.len());
    assert_eq!(stats.given, 2);
    assert_eq!(stats.received, 3);
}

#[test]
fn weekly_window_boundary_is_strict() {
    let now = Utc.with_ymd_and_hms(2026, 6, 15, 9, 0, 0).unwrap();
    let records = vec![
        RecordBuilder::new("inside").ts(now - Duration::days(7) + Duration::seconds(1)).build(),
        RecordBuilder::new("boundary").ts(now - Duration::days(7)).build(),
        RecordBuilder::new("outside").ts(now - Duration::days(7) - Duration::seconds(1)).build(),
    ];
    let stats = view::compute_stats(&records, now);
    assert_eq!(stats.this_week, 1);
}

// ---------------------------------------------------------------------------
// Category digest
// ---------------------------------------------------------------------------

#[test]
fn categories_are_distinct_in_first_appearance_order() {
    let now = Utc::now();
    let records = seed_corpus(now);
    let tags = view::distinct_categories(&records);
    assert_eq!(
        tags,
        [
            "teamwork",
            "communication",
            "innovation",
            "problem-solving",
            "mentorship",
            "leadership",
            "creativity",
        ]
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_record() -> impl Strategy<Value = FeedbackRecord> {
    (
        0u32..10_000,
        any::<bool>(),
        0usize..4,
        0i64..400,
        "[a-z ]{0,30}",
    )
        .prop_map(|(id, is_given, tag_idx, age_hours, message)| {
            const TAGS: &[&str] = &["teamwork", "communication", "innovation", "leadership"];
            let anchor = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
            let mut b = RecordBuilder::new(format!("p{id}"))
                .category(TAGS[tag_idx])
                .message(message)
                .ts(anchor - Duration::hours(age_hours));
            b = if is_given {
                b.given_to("Alex")
            } else {
                b.received_from("Robin")
            };
            b.build()
        })
}

proptest! {
    /// Filtered output is a subset of the input and preserves relative order.
    #[test]
    fn prop_filter_is_an_order_preserving_subset(
        mut records in proptest::collection::vec(arb_record(), 0..50),
        direction in proptest::option::of(prop_oneof![
            Just(Direction::Given),
            Just(Direction::Received),
        ]),
        category in proptest::option::of(prop_oneof![
            Just("teamwork".to_string()),
            Just("gardening".to_string()),
        ]),
    ) {
        // Generated ids may collide; the position check below needs them unique.
        for (i, r) in records.iter_mut().enumerate() {
            r.id = format!("u{i}");
        }

        let f = FeedbackFilter {
            direction,
            category: category.clone(),
            search: String::new(),
        };
        let out = view::filter(&records, &f);

        prop_assert!(out.len() <= records.len());

        // Every survivor matches, in the order it appeared in the input.
        let mut last_pos = 0;
        for r in &out {
            let pos = records.iter().position(|c| c.id == r.id).unwrap();
            prop_assert!(pos >= last_pos);
            last_pos = pos;
            if let Some(d) = direction {
                prop_assert_eq!(r.direction, d);
            }
            if let Some(ref c) = category {
                prop_assert!(r.categories.iter().any(|t| t == c));
            }
        }
    }

    /// Sorting never loses or invents records.
    #[test]
    fn prop_sort_is_a_permutation(records in proptest::collection::vec(arb_record(), 0..50)) {
        let sorted = view::sort_by_recency(&records);
        prop_assert_eq!(sorted.len(), records.len());
        assert_recency_order!(sorted);
        for r in &records {
            prop_assert!(sorted.iter().any(|s| s.id == r.id));
        }
    }

    /// `recent(n)` is exactly the first `n` of the sorted view.
    #[test]
    fn prop_recent_is_sorted_prefix(
        records in proptest::collection::vec(arb_record(), 0..50),
        n in 0usize..10,
    ) {
        let sorted: Vec<&str> = view::sort_by_recency(&records)
            .iter().map(|r| r.id.as_str()).collect();
        let recent: Vec<&str> = view::recent(&records, n)
            .iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(&recent[..], &sorted[..n.min(sorted.len())]);
    }

    /// Direction counts always partition the corpus; the weekly count never
    /// exceeds the total.
    #[test]
    fn prop_stats_partition(records in proptest::collection::vec(arb_record(), 0..50)) {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let stats = view::compute_stats(&records, now);
        prop_assert_eq!(stats.given + stats.received, records.len());
        prop_assert!(stats.this_week <= records.len());
        let expected_week = records.iter()
            .filter(|r| r.ts > now - Duration::days(7))
            .count();
        prop_assert_eq!(stats.this_week, expected_week);
    }

    /// The category digest has no duplicates and covers every tag present.
    #[test]
    fn prop_categories_distinct_and_complete(
        records in proptest::collection::vec(arb_record(), 0..50),
    ) {
        let tags = view::distinct_categories(&records);
        for (i, tag) in tags.iter().enumerate() {
            prop_assert!(!tags[..i].contains(tag));
        }
        for r in &records {
            for tag in &r.categories {
                prop_assert!(tags.contains(tag));
            }
        }
    }
}
