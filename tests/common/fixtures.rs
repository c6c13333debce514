//! Static record corpora used across harnesses.
//!
//! The main corpus mirrors the five demonstration records the app seeds:
//! mixed directions, one anonymous sender, and timestamps straddling the
//! weekly stats window (ages 2, 5, 7, 10, and 12 days).

use crate::common::builders::RecordBuilder;
use chrono::{DateTime, Utc};
use fbhub_core::{FeedbackKind, FeedbackRecord};

/// The five demonstration records, anchored at `now`.
pub fn seed_corpus(now: DateTime<Utc>) -> Vec<FeedbackRecord> {
    vec![
        RecordBuilder::new("1")
            .received_from("Sarah Johnson")
            .kind(FeedbackKind::Positive)
            .category("teamwork")
            .category("communication")
            .message("Great job leading the project retrospective!")
            .days_before(now, 2)
            .build(),
        RecordBuilder::new("2")
            .given_to("Mike Chen")
            .kind(FeedbackKind::Constructive)
            .category("innovation")
            .category("problem-solving")
            .message("Your creative approach to the API integration was impressive.")
            .days_before(now, 5)
            .build(),
        RecordBuilder::new("3")
            .anonymous()
            .kind(FeedbackKind::Appreciation)
            .category("mentorship")
            .category("leadership")
            .message("Thank you for always being available to answer questions.")
            .days_before(now, 7)
            .build(),
        RecordBuilder::new("4")
            .given_to("Lisa Rodriguez")
            .kind(FeedbackKind::Positive)
            .category("creativity")
            .category("innovation")
            .message("The mobile app designs are outstanding.")
            .days_before(now, 10)
            .build(),
        RecordBuilder::new("5")
            .received_from("David Kim")
            .kind(FeedbackKind::Suggestion)
            .category("communication")
            .message("Consider presenting complex topics with more visual aids.")
            .days_before(now, 12)
            .build(),
    ]
}

/// Build a corpus of `n` records cycling directions, kinds, and categories,
/// each one hour older than the last.
pub fn build_corpus(n: usize, now: DateTime<Utc>) -> Vec<FeedbackRecord> {
    const TAGS: &[&str] = &["teamwork", "communication", "innovation", "leadership"];
    (0..n)
        .map(|i| {
            let kind = FeedbackKind::ALL[i % FeedbackKind::ALL.len()];
            let mut b = RecordBuilder::new(format!("r{i}"))
                .kind(kind)
                .category(TAGS[i % TAGS.len()])
                .message(format!("corpus message {i}"))
                .ts(now - chrono::Duration::hours(i as i64));
            b = if i % 2 == 0 {
                b.given_to(format!("colleague-{}", i % 7))
            } else {
                b.received_from(format!("colleague-{}", i % 7))
            };
            b.build()
        })
        .collect()
}
