// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::app::{AppState, Focus};
use crate::theme::Theme;
use crate::widgets::form::FormState;
use fbhub_core::types::CATEGORY_TAGS;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Toggle display of timestamps in the history pane
    Timestamps,
    // Open the feedback form, optionally pre-selecting a category tag
    Give(Option<String>),
    // Drop every active filter
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "ts" | "timestamps" => Ok(Command::Timestamps),
            "clear" => Ok(Command::Clear),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|midnight>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "give" => {
                if rest.is_empty() {
                    Ok(Command::Give(None))
                } else if CATEGORY_TAGS.contains(&rest) {
                    Ok(Command::Give(Some(rest.to_string())))
                } else {
                    Err(format!("unknown category: {rest}"))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
        }
        Command::Timestamps => {
            s.show_timestamps = !s.show_timestamps;
        }
        Command::Give(tag) => {
            s.form = Some(match tag {
                Some(tag) => FormState::with_category(tag),
                None => FormState::new(),
            });
        }
        Command::Clear => {
            s.direction_filter = None;
            s.category_filter = None;
            s.search.clear();
            if s.focus == Focus::Search {
                s.focus = Focus::History;
            }
        }
    }
}
