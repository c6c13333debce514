//! Widgets for the fbhub TUI.
//!
//! Each widget follows the same pattern: a plain `*State` struct owned by the
//! App shell that handles [`AppEvent`](crate::event::AppEvent) values, and a
//! borrowing render-only struct implementing ratatui's `Widget`.

pub mod command_bar;
pub mod detail;
pub mod filter_bar;
pub mod form;
pub mod help;
pub mod history;
pub mod recent;
pub mod stats_bar;

use crate::theme::Theme;
use fbhub_core::types::category_label;
use fbhub_core::{Direction, FeedbackRecord};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// The two-line card rendering shared by the recent and history panes.
///
/// Line 1: direction arrow, counterpart, kind label, optional timestamp.
/// Line 2: category badges followed by the truncated message.
///
/// `search` is the active search term; matching substrings in the
/// counterpart and summary are styled with the theme's search highlight.
pub(crate) fn record_card<'a>(
    record: &'a FeedbackRecord,
    theme: &Theme,
    selected: bool,
    timestamp: Option<String>,
    search: Option<&str>,
) -> [Line<'a>; 2] {
    let search = search.filter(|s| !s.is_empty());
    let (arrow, prefix) = match record.direction {
        Direction::Given => ("→", "To: "),
        Direction::Received => ("←", "From: "),
    };

    let who_style = Style::default().add_modifier(Modifier::BOLD);
    let mut header = vec![
        Span::styled(format!("{arrow} "), theme.direction_style(record.direction)),
        Span::styled(prefix, who_style),
    ];
    match search {
        Some(term) => header.extend(highlighted_spans(
            record.counterpart_label(),
            term,
            who_style,
            theme.search_highlight,
        )),
        None => header.push(Span::styled(record.counterpart_label(), who_style)),
    }
    header.push(Span::raw("  ·  "));
    header.push(Span::styled(record.kind.label(), theme.kind_style(record.kind)));
    if let Some(ts) = timestamp {
        header.push(Span::raw("  ·  "));
        header.push(Span::styled(ts, Style::default().add_modifier(Modifier::DIM)));
    }
    let mut header = Line::from(header);
    if selected {
        header = header.style(Style::default().add_modifier(Modifier::REVERSED));
    }

    let mut body = vec![Span::raw("  ")];
    for tag in &record.categories {
        body.push(Span::styled(
            format!("[{}]", category_label(tag)),
            theme.badge_style(tag),
        ));
        body.push(Span::raw(" "));
    }
    let summary_style = Style::default().add_modifier(Modifier::DIM);
    match search {
        Some(term) => body.extend(highlighted_spans(
            &record.summary(),
            term,
            summary_style,
            theme.search_highlight,
        )),
        None => body.push(Span::styled(record.summary().into_owned(), summary_style)),
    }

    [header, Line::from(body)]
}

/// Split `text` into spans, styling case-insensitive occurrences of `term`
/// with `highlight` and the rest with `base`.
///
/// When lowercasing shifts byte offsets (some non-ASCII mappings change the
/// encoded length) the text is returned unhighlighted rather than sliced at
/// a wrong boundary.
pub(crate) fn highlighted_spans(
    text: &str,
    term: &str,
    base: Style,
    highlight: Style,
) -> Vec<Span<'static>> {
    let haystack = text.to_lowercase();
    let needle = term.to_lowercase();
    if needle.is_empty() || haystack.len() != text.len() {
        return vec![Span::styled(text.to_string(), base)];
    }

    let mut spans = Vec::new();
    let mut at = 0;
    while let Some(pos) = haystack[at..].find(&needle) {
        let start = at + pos;
        let end = start + needle.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return vec![Span::styled(text.to_string(), base)];
        }
        if start > at {
            spans.push(Span::styled(text[at..start].to_string(), base));
        }
        spans.push(Span::styled(text[start..end].to_string(), highlight));
        at = end;
    }
    if spans.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }
    if at < text.len() {
        spans.push(Span::styled(text[at..].to_string(), base));
    }
    spans
}
