//! Stats bar — the three counter cards across the top of the screen.
//!
//! Counters are recomputed from the store every frame via
//! [`fbhub_core::view::compute_stats`] with "now" injected at the call site,
//! so the trailing-week count drifts correctly during a long-running session.

use crate::theme::Theme;
use fbhub_core::Stats;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub struct StatsBar<'a> {
    stats: Stats,
    theme: &'a Theme,
}

impl<'a> StatsBar<'a> {
    pub fn new(stats: Stats, theme: &'a Theme) -> Self {
        Self { stats, theme }
    }
}

impl Widget for StatsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let entries = [
            ("Given", self.stats.given, self.theme.direction_given),
            ("Received", self.stats.received, self.theme.direction_received),
            (
                "This week",
                self.stats.this_week,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];

        for ((title, count, style), slot) in entries.into_iter().zip(cards.iter()) {
            let block = Block::bordered()
                .title(title)
                .border_style(self.theme.border_unfocused);
            let inner = block.inner(*slot);
            block.render(*slot, buf);
            Paragraph::new(Line::from(Span::styled(count.to_string(), style)))
                .render(inner, buf);
        }
    }
}
