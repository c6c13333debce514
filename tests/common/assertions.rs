//! Domain-specific assertion macros for fbhub harnesses.
//!
//! These wrap plain panics with context-rich failure messages that make it
//! clear which record violated an expectation and where in the derivation
//! pipeline the violation occurred.

// ---------------------------------------------------------------------------
// Identity assertions
// ---------------------------------------------------------------------------

/// Assert that a slice of record references has exactly these ids, in order.
///
/// ```rust
/// assert_ids!(view::filter(&records, &f), ["2", "4"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($records:expr, $expected:expr) => {{
        let actual: Vec<&str> = $records.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = $expected.to_vec();
        if actual != expected {
            panic!(
                "assert_ids! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that every record in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |r| r.direction == Direction::Given);
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let failing: Vec<&str> = $results
            .iter()
            .filter(|r| !($pred)(r))
            .map(|r| r.id.as_str())
            .collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} records did not satisfy predicate: {:?}",
                failing.len(),
                $results.len(),
                failing
            );
        }
    }};
}

/// Assert that at least one record in a result set satisfies a predicate.
#[macro_export]
macro_rules! assert_results_contain {
    ($results:expr, $pred:expr) => {{
        if !$results.iter().any(|r| ($pred)(r)) {
            panic!(
                "assert_results_contain! failed: no record matched predicate.\n  {} records checked.",
                $results.len()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Ordering assertions
// ---------------------------------------------------------------------------

/// Assert that a slice of record references is sorted most recent first.
#[macro_export]
macro_rules! assert_recency_order {
    ($records:expr) => {{
        for pair in $records.windows(2) {
            if pair[0].ts < pair[1].ts {
                panic!(
                    "assert_recency_order! failed: record {:?} ({}) precedes newer record {:?} ({})",
                    pair[0].id, pair[0].ts, pair[1].id, pair[1].ts
                );
            }
        }
    }};
}
