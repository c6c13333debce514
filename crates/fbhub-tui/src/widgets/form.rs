//! Feedback form — modal overlay for composing a new submission.
//!
//! The form edits a [`FeedbackDraft`] field by field; nothing is validated
//! until the user submits, at which point [`FeedbackDraft::build`] either
//! yields the record or a [`ValidationError`] rendered inline at the bottom
//! of the form. On failure the form stays open and no record is constructed.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `Tab` | Next field |
//! | `↑` / `↓` | Move within the kind selector; next/previous field elsewhere |
//! | `←` / `→` | Move within the category row; text cursor in text fields |
//! | `Space` | Toggle category / anonymous flag |
//! | `Enter` | Advance from recipient/kind; toggle category; submit from message/anonymous |
//! | `Escape` | Cancel without submitting |

use crate::event::{AppEvent, NavDirection};
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use fbhub_core::types::{category_label, CATEGORY_TAGS};
use fbhub_core::{FeedbackDraft, FeedbackKind, FeedbackRecord, ValidationError};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Which form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Recipient,
    Kind,
    Categories,
    Message,
    Anonymous,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Recipient => FormField::Kind,
            FormField::Kind => FormField::Categories,
            FormField::Categories => FormField::Message,
            FormField::Message => FormField::Anonymous,
            FormField::Anonymous => FormField::Recipient,
        }
    }
}

/// What the App shell should do after the form handled an event.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Nothing — the form consumed the event internally.
    Noop,
    /// Close the form without submitting.
    Cancel,
    /// The draft validated; add this record to the store and close.
    Submit(FeedbackRecord),
}

/// Modal state for an in-progress submission.
#[derive(Debug)]
pub struct FormState {
    pub draft: FeedbackDraft,
    pub field: FormField,
    /// Highlighted row in the kind selector.
    pub kind_cursor: usize,
    /// Highlighted badge in the category row.
    pub category_cursor: usize,
    /// Byte offset of the text cursor in the recipient input.
    pub recipient_cursor: usize,
    /// Byte offset of the text cursor in the message input.
    pub message_cursor: usize,
    /// Validation failure from the last submit attempt, cleared on edit.
    pub error: Option<ValidationError>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            draft: FeedbackDraft::default(),
            field: FormField::Recipient,
            kind_cursor: 0,
            category_cursor: 0,
            recipient_cursor: 0,
            message_cursor: 0,
            error: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the form with a quick-action category pre-selected.
    pub fn with_category(tag: impl Into<String>) -> Self {
        Self {
            draft: FeedbackDraft::with_category(tag),
            ..Self::default()
        }
    }

    /// Handle an event while the form is open.
    ///
    /// The event loop uses the insert-mode key map whenever the form is open,
    /// so this only ever sees `Char`, `Nav`, `Backspace`, `Enter`, `Escape`,
    /// and `FocusNext`.
    pub fn handle(&mut self, event: &AppEvent, now: DateTime<Utc>) -> FormAction {
        match event {
            AppEvent::Escape => return FormAction::Cancel,
            AppEvent::FocusNext => {
                self.field = self.field.next();
                return FormAction::Noop;
            }
            _ => {}
        }

        match self.field {
            FormField::Recipient => self.handle_recipient(event),
            FormField::Kind => self.handle_kind(event, now),
            FormField::Categories => self.handle_categories(event, now),
            FormField::Message => self.handle_message(event, now),
            FormField::Anonymous => self.handle_anonymous(event, now),
        }
    }

    fn submit(&mut self, now: DateTime<Utc>) -> FormAction {
        match self.draft.build(now) {
            Ok(record) => {
                tracing::info!(id = %record.id, recipient = ?record.counterpart, "feedback submitted");
                FormAction::Submit(record)
            }
            Err(err) => {
                tracing::debug!(%err, "form validation failed");
                self.error = Some(err);
                FormAction::Noop
            }
        }
    }

    fn handle_recipient(&mut self, event: &AppEvent) -> FormAction {
        match event {
            AppEvent::Char(c) => {
                self.error = None;
                self.draft.recipient.insert(self.recipient_cursor, *c);
                self.recipient_cursor += c.len_utf8();
            }
            AppEvent::Backspace => {
                if self.recipient_cursor > 0 {
                    let prev = prev_boundary(&self.draft.recipient, self.recipient_cursor);
                    self.draft.recipient.remove(prev);
                    self.recipient_cursor = prev;
                }
            }
            AppEvent::Nav(NavDirection::Left) => {
                self.recipient_cursor = prev_boundary(&self.draft.recipient, self.recipient_cursor);
            }
            AppEvent::Nav(NavDirection::Right) => {
                self.recipient_cursor = next_boundary(&self.draft.recipient, self.recipient_cursor);
            }
            // Enter moves on, like a web form
            AppEvent::Enter | AppEvent::Nav(NavDirection::Down) => {
                self.field = FormField::Kind;
            }
            _ => {}
        }
        FormAction::Noop
    }

    fn handle_kind(&mut self, event: &AppEvent, now: DateTime<Utc>) -> FormAction {
        match event {
            AppEvent::Nav(NavDirection::Up) => {
                self.kind_cursor = self.kind_cursor.saturating_sub(1);
            }
            AppEvent::Nav(NavDirection::Down) => {
                self.kind_cursor = (self.kind_cursor + 1).min(FeedbackKind::ALL.len() - 1);
            }
            AppEvent::Char(' ') => {
                self.error = None;
                self.draft.kind = Some(FeedbackKind::ALL[self.kind_cursor]);
            }
            AppEvent::Enter => {
                self.error = None;
                self.draft.kind = Some(FeedbackKind::ALL[self.kind_cursor]);
                self.field = FormField::Categories;
            }
            _ => {}
        }
        FormAction::Noop
    }

    fn handle_categories(&mut self, event: &AppEvent, _now: DateTime<Utc>) -> FormAction {
        match event {
            AppEvent::Nav(NavDirection::Left) => {
                self.category_cursor = self.category_cursor.saturating_sub(1);
            }
            AppEvent::Nav(NavDirection::Right) => {
                self.category_cursor = (self.category_cursor + 1).min(CATEGORY_TAGS.len() - 1);
            }
            AppEvent::Char(' ') | AppEvent::Enter => {
                self.draft.toggle_category(CATEGORY_TAGS[self.category_cursor]);
            }
            AppEvent::Nav(NavDirection::Down) => {
                self.field = FormField::Message;
            }
            AppEvent::Nav(NavDirection::Up) => {
                self.field = FormField::Kind;
            }
            _ => {}
        }
        FormAction::Noop
    }

    fn handle_message(&mut self, event: &AppEvent, now: DateTime<Utc>) -> FormAction {
        match event {
            AppEvent::Char(c) => {
                self.error = None;
                self.draft.message.insert(self.message_cursor, *c);
                self.message_cursor += c.len_utf8();
            }
            AppEvent::Backspace => {
                if self.message_cursor > 0 {
                    let prev = prev_boundary(&self.draft.message, self.message_cursor);
                    self.draft.message.remove(prev);
                    self.message_cursor = prev;
                }
            }
            AppEvent::Nav(NavDirection::Left) => {
                self.message_cursor = prev_boundary(&self.draft.message, self.message_cursor);
            }
            AppEvent::Nav(NavDirection::Right) => {
                self.message_cursor = next_boundary(&self.draft.message, self.message_cursor);
            }
            AppEvent::Enter => return self.submit(now),
            _ => {}
        }
        FormAction::Noop
    }

    fn handle_anonymous(&mut self, event: &AppEvent, now: DateTime<Utc>) -> FormAction {
        match event {
            AppEvent::Char(' ') => {
                self.draft.anonymous = !self.draft.anonymous;
            }
            AppEvent::Enter => return self.submit(now),
            _ => {}
        }
        FormAction::Noop
    }
}

fn prev_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

fn next_boundary(s: &str, cursor: usize) -> usize {
    if cursor >= s.len() {
        return s.len();
    }
    s[cursor..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| cursor + i)
        .unwrap_or(s.len())
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Form<'a> {
    state: &'a FormState,
    theme: &'a Theme,
}

impl<'a> Form<'a> {
    pub fn new(state: &'a FormState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn field_block(&self, title: &'static str, field: FormField) -> Block<'static> {
        let style = if self.state.field == field {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        Block::bordered().title(title).border_style(style)
    }
}

impl Widget for Form<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(area.width.saturating_sub(8).min(76), 24, area);
        Clear.render(popup, buf);

        let outer = Block::bordered()
            .title(" Give Feedback (Esc to cancel) ")
            .border_style(self.theme.border_focused);
        let inner = outer.inner(popup);
        outer.render(popup, buf);

        // recipient(3) | kind(6) | categories(3) | message(fill) | anonymous+error(2)
        let rows = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(2),
            ])
            .split(inner);

        // Recipient
        let block = self.field_block("Recipient *", FormField::Recipient);
        let text_area = block.inner(rows[0]);
        block.render(rows[0], buf);
        let recipient_line = if self.state.draft.recipient.is_empty() {
            Line::styled(
                "colleague's name",
                Style::default().add_modifier(Modifier::DIM),
            )
        } else {
            Line::raw(self.state.draft.recipient.as_str())
        };
        Paragraph::new(recipient_line).render(text_area, buf);

        // Kind selector
        let block = self.field_block("Feedback Type *", FormField::Kind);
        let kind_area = block.inner(rows[1]);
        block.render(rows[1], buf);
        let kind_lines: Vec<Line> = FeedbackKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let selected = self.state.draft.kind == Some(*kind);
                let marker = if selected { "●" } else { "○" };
                let mut line = Line::from(vec![
                    Span::styled(format!(" {marker} "), self.theme.kind_style(*kind)),
                    Span::styled(kind.label(), self.theme.kind_style(*kind)),
                    Span::styled(
                        format!("  — {}", kind.description()),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ]);
                if self.state.field == FormField::Kind && i == self.state.kind_cursor {
                    line = line.style(Style::default().add_modifier(Modifier::REVERSED));
                }
                line
            })
            .collect();
        Paragraph::new(kind_lines).render(kind_area, buf);

        // Category badges
        let block = self.field_block("Categories", FormField::Categories);
        let cat_area = block.inner(rows[2]);
        block.render(rows[2], buf);
        let mut badges = Vec::new();
        for (i, tag) in CATEGORY_TAGS.iter().enumerate() {
            let selected = self.state.draft.categories.iter().any(|c| c == tag);
            let mut style = if selected {
                self.theme.badge_style(tag).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            if self.state.field == FormField::Categories && i == self.state.category_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let mark = if selected { "■" } else { "□" };
            badges.push(Span::styled(format!("{mark} {}", category_label(tag)), style));
            badges.push(Span::raw("  "));
        }
        Paragraph::new(Line::from(badges)).render(cat_area, buf);

        // Message
        let block = self.field_block("Message *", FormField::Message);
        let msg_area = block.inner(rows[3]);
        block.render(rows[3], buf);
        let message_line = if self.state.draft.message.is_empty() {
            Line::styled(
                "Share specific, actionable feedback…",
                Style::default().add_modifier(Modifier::DIM),
            )
        } else {
            Line::raw(self.state.draft.message.as_str())
        };
        Paragraph::new(message_line)
            .wrap(Wrap { trim: false })
            .render(msg_area, buf);

        // Anonymous toggle + error line
        let anon_mark = if self.state.draft.anonymous { "[x]" } else { "[ ]" };
        let mut anon_style = Style::default();
        if self.state.field == FormField::Anonymous {
            anon_style = anon_style.add_modifier(Modifier::REVERSED);
        }
        let footer = if let Some(ref err) = self.state.error {
            Line::from(vec![
                Span::styled(format!("{anon_mark} Send anonymously   "), anon_style),
                Span::styled(
                    format!("✗ {err}"),
                    Style::default()
                        .fg(ratatui::style::Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!("{anon_mark} Send anonymously   "), anon_style),
                Span::styled(
                    "Enter from the message field submits",
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ])
        };
        Paragraph::new(footer).render(rows[4], buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
