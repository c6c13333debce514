//! View derivation — pure functions over a snapshot of the store's records.
//!
//! Filtering, recency sorting, category enumeration, and aggregate statistics
//! all live here. Nothing in this module holds state or reads the clock;
//! "now" is injected so every derivation is deterministic given the same
//! inputs.

use crate::types::{Direction, FeedbackRecord};
use chrono::{DateTime, Duration, Utc};

/// User-editable filter state for the history list.
///
/// `None` / empty fields are pass-through; the three predicates are
/// conjunctive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackFilter {
    /// Keep only records with this direction.
    pub direction: Option<Direction>,
    /// Keep only records whose category set contains this tag.
    pub category: Option<String>,
    /// Case-insensitive substring match against the message and, when
    /// present, the counterpart name.
    pub search: String,
}

impl FeedbackFilter {
    /// True when every predicate is pass-through.
    pub fn is_empty(&self) -> bool {
        self.direction.is_none() && self.category.is_none() && self.search.is_empty()
    }

    /// Reset all predicates to pass-through.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a record satisfies all active predicates.
    pub fn matches(&self, record: &FeedbackRecord) -> bool {
        let matches_direction = match self.direction {
            Some(d) => record.direction == d,
            None => true,
        };
        let matches_category = match &self.category {
            Some(tag) => record.categories.iter().any(|c| c == tag),
            None => true,
        };
        let matches_search = if self.search.is_empty() {
            true
        } else {
            let term = self.search.to_lowercase();
            record.message.to_lowercase().contains(&term)
                || record
                    .counterpart
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&term))
        };

        matches_direction && matches_category && matches_search
    }
}

/// Records satisfying the filter, in their original relative order.
pub fn filter<'a>(
    records: &'a [FeedbackRecord],
    filter: &FeedbackFilter,
) -> Vec<&'a FeedbackRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Union of all category tags across records, in first-appearance order.
///
/// Order carries no meaning but is stable so UI option lists don't reshuffle
/// between renders.
pub fn distinct_categories(records: &[FeedbackRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        for tag in &record.categories {
            if !seen.contains(tag) {
                seen.push(tag.clone());
            }
        }
    }
    seen
}

/// Records sorted descending by timestamp. Stable: records with equal
/// timestamps keep their relative input order.
pub fn sort_by_recency(records: &[FeedbackRecord]) -> Vec<&FeedbackRecord> {
    let mut sorted: Vec<&FeedbackRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.ts.cmp(&a.ts));
    sorted
}

/// The `n` most recent records, newest first. Returns everything when fewer
/// than `n` exist; `n == 0` returns nothing.
pub fn recent(records: &[FeedbackRecord], n: usize) -> Vec<&FeedbackRecord> {
    let mut sorted = sort_by_recency(records);
    sorted.truncate(n);
    sorted
}

/// Aggregate counters shown in the stats bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub given: usize,
    pub received: usize,
    /// Records inside the trailing 7-day window ending at the injected "now".
    pub this_week: usize,
}

/// Count records by direction and within the trailing week.
///
/// The window is half-open and strict: a record exactly 7 days old is
/// excluded (`ts > now - 7d`).
pub fn compute_stats(records: &[FeedbackRecord], now: DateTime<Utc>) -> Stats {
    let week_ago = now - Duration::days(7);
    let mut stats = Stats::default();

    for record in records {
        match record.direction {
            Direction::Given => stats.given += 1,
            Direction::Received => stats.received += 1,
        }
        if record.ts > week_ago {
            stats.this_week += 1;
        }
    }
    stats
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
