//! Core types for fbhub-core — Feedback Hub.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the [`FeedbackRecord`], its [`Direction`], and the
//! [`FeedbackKind`] discriminant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Maximum message length shown in summary views before truncation.
const SUMMARY_MAX_CHARS: usize = 150;

/// The fixed category-tag vocabulary offered by the feedback form.
///
/// Records may carry tags outside this list (seed data, future vocabulary
/// growth); consumers must treat unknown tags as valid and render them with a
/// fallback style.
pub const CATEGORY_TAGS: &[&str] = &[
    "teamwork",
    "communication",
    "innovation",
    "leadership",
    "problem-solving",
    "mentorship",
    "creativity",
    "reliability",
];

/// A single peer-feedback note held in the store.
///
/// Records are immutable once constructed. User-submitted records go through
/// [`FeedbackDraft::build`](crate::draft::FeedbackDraft::build), which is the
/// only place the field invariants (non-empty message, present kind) are
/// enforced; seed data is trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Opaque unique id, assigned at creation (millisecond-timestamp derived
    /// for user submissions).
    pub id: String,
    /// Whether this feedback was given or received by the user.
    pub direction: Direction,
    /// Recipient name when given; sender name when received. `None` on a
    /// received record means the sender chose to stay anonymous.
    pub counterpart: Option<String>,
    /// Rhetorical category of the note.
    pub kind: FeedbackKind,
    /// Topical tags, in the order the author attached them.
    pub categories: Vec<String>,
    /// The feedback text. Never empty.
    pub message: String,
    /// Creation instant (UTC), immutable.
    pub ts: DateTime<Utc>,
    /// Whether the author asked not to be named. Informational only — it
    /// never affects filtering.
    #[serde(default)]
    pub anonymous: bool,
}

impl FeedbackRecord {
    /// Counterpart name for display, falling back to `"Anonymous"` when the
    /// sender of a received record is unknown.
    pub fn counterpart_label(&self) -> &str {
        self.counterpart.as_deref().unwrap_or("Anonymous")
    }

    /// Message truncated to 150 characters with an ellipsis, for summary
    /// views. The full text is only shown in the detail view.
    pub fn summary(&self) -> Cow<'_, str> {
        if self.message.chars().count() <= SUMMARY_MAX_CHARS {
            Cow::Borrowed(&self.message)
        } else {
            let cut: String = self.message.chars().take(SUMMARY_MAX_CHARS).collect();
            Cow::Owned(format!("{cut}…"))
        }
    }
}

/// Whether a feedback record represents feedback the user gave or received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Given,
    Received,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Given => write!(f, "given"),
            Direction::Received => write!(f, "received"),
        }
    }
}

/// The rhetorical category of a feedback note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Positive,
    Constructive,
    Appreciation,
    Suggestion,
}

impl FeedbackKind {
    /// All kinds, in the order the form offers them.
    pub const ALL: [FeedbackKind; 4] = [
        FeedbackKind::Positive,
        FeedbackKind::Constructive,
        FeedbackKind::Appreciation,
        FeedbackKind::Suggestion,
    ];

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackKind::Positive => "Positive Recognition",
            FeedbackKind::Constructive => "Constructive Feedback",
            FeedbackKind::Appreciation => "Appreciation",
            FeedbackKind::Suggestion => "Suggestion",
        }
    }

    /// One-line description shown next to the label in the form selector.
    pub fn description(&self) -> &'static str {
        match self {
            FeedbackKind::Positive => "Highlight great work and achievements",
            FeedbackKind::Constructive => "Share growth opportunities",
            FeedbackKind::Appreciation => "Express gratitude and thanks",
            FeedbackKind::Suggestion => "Propose ideas for improvement",
        }
    }
}

impl std::fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackKind::Positive => write!(f, "positive"),
            FeedbackKind::Constructive => write!(f, "constructive"),
            FeedbackKind::Appreciation => write!(f, "appreciation"),
            FeedbackKind::Suggestion => write!(f, "suggestion"),
        }
    }
}

/// Display form of a category tag: first letter uppercased, hyphens replaced
/// with spaces. Works for tags outside [`CATEGORY_TAGS`] as well.
pub fn category_label(tag: &str) -> String {
    let spaced = tag.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
