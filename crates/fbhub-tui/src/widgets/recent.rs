//! Recent pane — the handful of most recent records, unfiltered.
//!
//! A fixed short list (`ui.recent_count`, default 3), so navigation is plain
//! cursor movement without scrolling. `Enter` opens the detail view for the
//! highlighted record, same as the history pane.

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

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RecentState {
    /// Index of the highlighted record (0 = newest).
    pub cursor: usize,
}

impl RecentState {
    /// Handle a navigation event against a list of `len` records.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        match event {
            AppEvent::Nav(NavDirection::Up) | AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(NavDirection::Down) | AppEvent::ScrollDown => {
                self.cursor = (self.cursor + 1).min(len - 1);
            }
            _ => {}
        }
        self.cursor = self.cursor.min(len - 1);
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Recent<'a> {
    records: &'a [&'a FeedbackRecord],
    state: &'a RecentState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Recent<'a> {
    pub fn new(
        records: &'a [&'a FeedbackRecord],
        state: &'a RecentState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            records,
            state,
            focused,
            theme,
        }
    }
}

impl Widget for Recent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered()
            .title("Recent")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.records.is_empty() {
            let hint = Paragraph::new(Line::styled(
                "No feedback yet. Press n to give some!",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .centered();
            hint.render(inner, buf);
            return;
        }

        let mut y = inner.y;
        for (idx, record) in self.records.iter().enumerate() {
            if y + 1 >= inner.bottom() {
                break;
            }
            let selected = self.focused && idx == self.state.cursor;
            let [header, body] = record_card(record, self.theme, selected, None, None);
            buf.set_line(inner.x, y, &header, inner.width);
            buf.set_line(inner.x, y + 1, &body, inner.width);
            // Blank spacer row between cards
            y += 3;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cursor_stays_within_bounds() {
        let mut s = RecentState::default();
        s.handle(&AppEvent::Nav(NavDirection::Down), 3);
        s.handle(&AppEvent::Nav(NavDirection::Down), 3);
        s.handle(&AppEvent::Nav(NavDirection::Down), 3);
        assert_eq!(s.cursor, 2);
        s.handle(&AppEvent::Nav(NavDirection::Up), 3);
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn empty_list_pins_cursor_to_zero() {
        let mut s = RecentState { cursor: 2 };
        s.handle(&AppEvent::Nav(NavDirection::Up), 0);
        assert_eq!(s.cursor, 0);
    }
}
