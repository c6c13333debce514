//! Test builders — ergonomic constructors for `FeedbackRecord` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, Duration, Utc};
use fbhub_core::{Direction, FeedbackKind, FeedbackRecord};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`FeedbackRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("1")
///     .received_from("Sarah Johnson")
///     .kind(FeedbackKind::Positive)
///     .category("teamwork")
///     .days_ago(2)
///     .build();
/// ```
pub struct RecordBuilder {
    id: String,
    direction: Direction,
    counterpart: Option<String>,
    kind: FeedbackKind,
    categories: Vec<String>,
    message: String,
    ts: DateTime<Utc>,
    anonymous: bool,
}

impl RecordBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            direction: Direction::Given,
            counterpart: Some("Test Colleague".to_string()),
            kind: FeedbackKind::Positive,
            categories: Vec::new(),
            message: "test feedback message".to_string(),
            ts: Utc::now(),
            anonymous: false,
        }
    }

    pub fn given_to(mut self, name: impl Into<String>) -> Self {
        self.direction = Direction::Given;
        self.counterpart = Some(name.into());
        self
    }

    pub fn received_from(mut self, name: impl Into<String>) -> Self {
        self.direction = Direction::Received;
        self.counterpart = Some(name.into());
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.direction = Direction::Received;
        self.counterpart = None;
        self.anonymous = true;
        self
    }

    pub fn kind(mut self, kind: FeedbackKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn category(mut self, tag: impl Into<String>) -> Self {
        self.categories.push(tag.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn ts(mut self, ts: DateTime<Utc>) -> Self {
        self.ts = ts;
        self
    }

    /// Timestamp the record `days` whole days before `Utc::now()`.
    pub fn days_ago(mut self, days: i64) -> Self {
        self.ts = Utc::now() - Duration::days(days);
        self
    }

    /// Timestamp the record `days` whole days before the given anchor.
    pub fn days_before(mut self, now: DateTime<Utc>, days: i64) -> Self {
        self.ts = now - Duration::days(days);
        self
    }

    pub fn build(self) -> FeedbackRecord {
        FeedbackRecord {
            id: self.id,
            direction: self.direction,
            counterpart: self.counterpart,
            kind: self.kind,
            categories: self.categories,
            message: self.message,
            ts: self.ts,
            anonymous: self.anonymous,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a record given to `name`, timestamped now.
pub fn given(id: &str, name: &str) -> FeedbackRecord {
    RecordBuilder::new(id).given_to(name).build()
}

/// Build a record received from `name`, timestamped now.
pub fn received(id: &str, name: &str) -> FeedbackRecord {
    RecordBuilder::new(id).received_from(name).build()
}
