//! Draft — the validated submission boundary between the form and the store.
//!
//! The form edits a [`FeedbackDraft`] freely; nothing is checked while the
//! user types. [`FeedbackDraft::build`] is where the record invariants are
//! enforced: on failure the record is never constructed, and the form surfaces
//! the [`ValidationError`] to the user.

use crate::types::{Direction, FeedbackKind, FeedbackRecord};
use chrono::{DateTime, Utc};

/// Why a draft could not be turned into a [`FeedbackRecord`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("recipient is required")]
    MissingRecipient,
    #[error("feedback type is required")]
    MissingKind,
    #[error("message is required")]
    EmptyMessage,
}

/// In-progress form state for a new feedback submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackDraft {
    pub recipient: String,
    pub kind: Option<FeedbackKind>,
    /// Selected tags, in toggle order.
    pub categories: Vec<String>,
    pub message: String,
    pub anonymous: bool,
}

impl FeedbackDraft {
    /// Start a blank draft with one category pre-selected (the quick-action
    /// path: `:give teamwork`).
    pub fn with_category(tag: impl Into<String>) -> Self {
        Self {
            categories: vec![tag.into()],
            ..Self::default()
        }
    }

    /// Add the tag if absent, remove it if present. Insertion order of the
    /// remaining tags is preserved.
    pub fn toggle_category(&mut self, tag: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == tag) {
            self.categories.remove(pos);
        } else {
            self.categories.push(tag.to_string());
        }
    }

    /// Validate the draft and construct the record.
    ///
    /// The id is derived from `now` in milliseconds. Submitted records are
    /// always `Direction::Given`: the app has no runtime path that creates a
    /// received record (those only exist in seed data).
    pub fn build(&self, now: DateTime<Utc>) -> Result<FeedbackRecord, ValidationError> {
        if self.recipient.trim().is_empty() {
            return Err(ValidationError::MissingRecipient);
        }
        let kind = self.kind.ok_or(ValidationError::MissingKind)?;
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        Ok(FeedbackRecord {
            id: now.timestamp_millis().to_string(),
            direction: Direction::Given,
            counterpart: Some(self.recipient.trim().to_string()),
            kind,
            categories: self.categories.clone(),
            message: self.message.trim().to_string(),
            ts: now,
            anonymous: self.anonymous,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> FeedbackDraft {
        FeedbackDraft {
            recipient: "Mike Chen".to_string(),
            kind: Some(FeedbackKind::Constructive),
            categories: vec!["innovation".to_string()],
            message: "Document your thought process.".to_string(),
            anonymous: false,
        }
    }

    #[test]
    fn valid_draft_builds_a_given_record() {
        let now = Utc::now();
        let record = filled().build(now).unwrap();
        assert_eq!(record.direction, Direction::Given);
        assert_eq!(record.counterpart.as_deref(), Some("Mike Chen"));
        assert_eq!(record.kind, FeedbackKind::Constructive);
        assert_eq!(record.ts, now);
        assert_eq!(record.id, now.timestamp_millis().to_string());
    }

    #[test]
    fn missing_recipient_is_rejected() {
        let mut draft = filled();
        draft.recipient = "   ".to_string();
        assert_eq!(draft.build(Utc::now()), Err(ValidationError::MissingRecipient));
    }

    #[test]
    fn missing_kind_is_rejected() {
        let mut draft = filled();
        draft.kind = None;
        assert_eq!(draft.build(Utc::now()), Err(ValidationError::MissingKind));
    }

    #[test]
    fn whitespace_only_message_is_rejected() {
        let mut draft = filled();
        draft.message = " \n\t ".to_string();
        assert_eq!(draft.build(Utc::now()), Err(ValidationError::EmptyMessage));
    }

    #[test]
    fn categories_are_optional() {
        let mut draft = filled();
        draft.categories.clear();
        assert!(draft.build(Utc::now()).is_ok());
    }

    #[test]
    fn toggle_category_adds_then_removes() {
        let mut draft = FeedbackDraft::default();
        draft.toggle_category("teamwork");
        draft.toggle_category("mentorship");
        assert_eq!(draft.categories, ["teamwork", "mentorship"]);

        draft.toggle_category("teamwork");
        assert_eq!(draft.categories, ["mentorship"]);
    }

    #[test]
    fn with_category_preselects_the_quick_action_tag() {
        let draft = FeedbackDraft::with_category("leadership");
        assert_eq!(draft.categories, ["leadership"]);
        assert!(draft.recipient.is_empty());
    }
}
