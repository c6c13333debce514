//! Store — append-only in-memory sequence of [`FeedbackRecord`] values.
//!
//! The store is the single source of truth; the UI reads from it, never from
//! form state directly. Records are never mutated or removed after insertion,
//! and no ordering beyond insertion order is maintained here — consumers sort
//! explicitly via [`crate::view`].

use crate::types::FeedbackRecord;

/// Append-only log of feedback records.
///
/// `add` never validates fields; [`FeedbackDraft::build`](crate::draft::FeedbackDraft::build)
/// is the validation boundary, so a record that reaches the store is by
/// construction well-formed.
#[derive(Debug, Default, Clone)]
pub struct FeedbackStore {
    records: Vec<FeedbackRecord>,
}

impl FeedbackStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given records, in order.
    pub fn seeded(records: Vec<FeedbackRecord>) -> Self {
        Self { records }
    }

    /// Append a record. Always succeeds; visible to all subsequent reads.
    pub fn add(&mut self, record: FeedbackRecord) {
        self.records.push(record);
    }

    /// All records in insertion order, most-recent-last. No timestamp-order
    /// guarantee — seed data may interleave arbitrarily with submissions.
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, FeedbackKind};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn record(id: &str) -> FeedbackRecord {
        FeedbackRecord {
            id: id.to_string(),
            direction: Direction::Given,
            counterpart: Some("Lisa Rodriguez".to_string()),
            kind: FeedbackKind::Positive,
            categories: vec![],
            message: "Outstanding UI designs.".to_string(),
            ts: Utc::now(),
            anonymous: false,
        }
    }

    #[test]
    fn add_is_visible_to_subsequent_reads() {
        let mut store = FeedbackStore::new();
        assert!(store.is_empty());

        store.add(record("a"));
        store.add(record("b"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].id, "b");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut store = FeedbackStore::seeded(vec![record("seed-1"), record("seed-2")]);
        store.add(record("new"));

        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["seed-1", "seed-2", "new"]);
    }
}
