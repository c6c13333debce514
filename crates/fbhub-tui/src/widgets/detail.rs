//! Detail popup — centred floating overlay showing one record in full.
//!
//! Opened with `Enter` from the recent or history pane; closed with `Escape`,
//! `Enter`, or `q`. Unlike the summary cards, the message is shown untruncated
//! and wrapped.

use crate::theme::Theme;
use fbhub_core::types::category_label;
use fbhub_core::{Direction, FeedbackRecord};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

pub struct DetailPopup<'a> {
    record: &'a FeedbackRecord,
    theme: &'a Theme,
    timestamp_format: &'a str,
}

impl<'a> DetailPopup<'a> {
    pub fn new(record: &'a FeedbackRecord, theme: &'a Theme, timestamp_format: &'a str) -> Self {
        Self {
            record,
            theme,
            timestamp_format,
        }
    }
}

impl Widget for DetailPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(area.width.saturating_sub(10).min(72), 20, area);
        Clear.render(popup, buf);

        let title = match self.record.direction {
            Direction::Given => " Feedback Given (Esc to close) ",
            Direction::Received => " Feedback Received (Esc to close) ",
        };
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let who_heading = match self.record.direction {
            Direction::Given => "Recipient",
            Direction::Received => "Sender",
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{who_heading}: "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(self.record.counterpart_label()),
            ]),
            Line::from(Span::styled(
                self.record.kind.label(),
                self.theme.kind_style(self.record.kind),
            )),
            Line::from(Span::styled(
                self.record.ts.format(self.timestamp_format).to_string(),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        if !self.record.categories.is_empty() {
            let mut badges = Vec::new();
            for tag in &self.record.categories {
                badges.push(Span::styled(
                    format!("[{}]", category_label(tag)),
                    self.theme.badge_style(tag),
                ));
                badges.push(Span::raw(" "));
            }
            lines.push(Line::from(badges));
        }

        if self.record.anonymous {
            lines.push(Line::from(Span::styled(
                "Sent anonymously",
                Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
            )));
        }

        lines.push(Line::raw(""));
        for text_line in self.record.message.lines() {
            lines.push(Line::raw(text_line));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
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
