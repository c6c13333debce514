//! History widget — the filtered, recency-sorted feedback list.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one card |
//! | `↓` / `j` | Move cursor down one card |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `Enter` | Open the detail view for the selected record |
//!
//! # Scroll semantics
//!
//! `scroll` = index of the first visible card (0 = newest, since the list is
//! recency-sorted). The cursor is always kept within the visible window;
//! moving it past the edge auto-scrolls. The record list itself is derived
//! fresh each frame by the App shell and passed in by reference.

use std::cell::Cell;

use crate::event::{AppEvent, NavDirection};
use crate::theme::Theme;
use crate::widgets::record_card;
use fbhub_core::FeedbackRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// Terminal rows each record card occupies.
const CARD_ROWS: usize = 2;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct HistoryState {
    /// Index of the highlighted card within the currently displayed list.
    pub cursor: usize,
    /// Index of the first visible card.
    pub scroll: usize,
    /// Cached from the last render so `handle()` can do cursor-aware paging.
    last_capacity: Cell<usize>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            cursor: 0,
            scroll: 0,
            last_capacity: Cell::new(10),
        }
    }
}

impl HistoryState {
    fn capacity(&self) -> usize {
        self.last_capacity.get().max(1)
    }

    /// Handle a navigation event against a list of `len` cards.
    ///
    /// The list shrinks and grows as filters change, so the cursor is clamped
    /// on every call rather than on filter edits.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            self.cursor = 0;
            self.scroll = 0;
            return;
        }

        match event {
            AppEvent::Nav(NavDirection::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(NavDirection::Down) => {
                self.cursor += 1;
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(self.capacity());
            }
            AppEvent::ScrollDown => {
                self.cursor += self.capacity();
            }
            _ => return,
        }
        self.clamp(len);
        tracing::debug!(cursor = self.cursor, scroll = self.scroll, "history nav");
    }

    /// Keep the cursor inside the list and the scroll window around it.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
            self.scroll = 0;
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        let cap = self.capacity();
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + cap {
            self.scroll = self.cursor + 1 - cap;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct History<'a> {
    records: &'a [&'a FeedbackRecord],
    state: &'a HistoryState,
    focused: bool,
    theme: &'a Theme,
    show_timestamps: bool,
    timestamp_format: &'a str,
    search: &'a str,
}

impl<'a> History<'a> {
    pub fn new(
        records: &'a [&'a FeedbackRecord],
        state: &'a HistoryState,
        focused: bool,
        theme: &'a Theme,
        show_timestamps: bool,
        timestamp_format: &'a str,
        search: &'a str,
    ) -> Self {
        Self {
            records,
            state,
            focused,
            theme,
            show_timestamps,
            timestamp_format,
            search,
        }
    }
}

impl Widget for History<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered()
            .title(format!("History ({})", self.records.len()))
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let capacity = (inner.height as usize / CARD_ROWS).max(1);
        self.state.last_capacity.set(capacity);

        if self.records.is_empty() {
            let hint = Paragraph::new(Line::styled(
                "No feedback matches your filters.",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .centered();
            hint.render(inner, buf);
            return;
        }

        let start = self.state.scroll.min(self.records.len().saturating_sub(1));
        let end = (start + capacity).min(self.records.len());

        let mut y = inner.y;
        for (idx, record) in self.records[start..end].iter().enumerate() {
            let selected = self.focused && start + idx == self.state.cursor;
            let ts = self
                .show_timestamps
                .then(|| record.ts.format(self.timestamp_format).to_string());
            let [header, body] = record_card(record, self.theme, selected, ts, Some(self.search));
            buf.set_line(inner.x, y, &header, inner.width);
            buf.set_line(inner.x, y + 1, &body, inner.width);
            y += CARD_ROWS as u16;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
