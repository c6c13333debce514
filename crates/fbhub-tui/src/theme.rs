//! Colour theme for the fbhub TUI.
//!
//! Themes are defined as TOML files. Both bundled themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::by_name`] at startup and pass the result through the
//! application as a shared reference.
//!
//! # Badge colours for category tags
//!
//! Tags from the fixed vocabulary are hashed to a stable index into the badge
//! palette so the same tag always gets the same colour within a session,
//! regardless of the order tags appear. Tags outside the vocabulary render
//! with the fallback badge style.

use config::{Config, File, FileFormat};
use fbhub_core::types::CATEGORY_TAGS;
use fbhub_core::{Direction, FeedbackKind};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const MIDNIGHT_THEME_SRC: &str = include_str!("themes/midnight.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(ref s) = self.fg {
            if let Some(c) = parse_color(s) {
                style = style.fg(c);
            }
        }
        if let Some(ref s) = self.bg {
            if let Some(c) = parse_color(s) {
                style = style.bg(c);
            }
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawKinds {
    positive: RawStyle,
    constructive: RawStyle,
    appreciation: RawStyle,
    suggestion: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawDirections {
    given: RawStyle,
    received: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBadges {
    palette: Vec<String>,
    fallback: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    kinds: RawKinds,
    directions: RawDirections,
    borders: RawBorders,
    badges: RawBadges,
    search: RawSearch,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// Load once at startup with [`Theme::by_name`] and pass as a shared
/// reference throughout the TUI. All styles are pre-resolved ratatui
/// [`Style`] values — no allocation at render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Styles for each feedback kind label.
    pub kind_positive: Style,
    pub kind_constructive: Style,
    pub kind_appreciation: Style,
    pub kind_suggestion: Style,

    /// Arrow / heading styles for given vs received records.
    pub direction_given: Style,
    pub direction_received: Style,

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    /// Style applied to the portion of a record that matches the active
    /// search term.
    pub search_highlight: Style,

    /// Badge style applied to tags outside the fixed vocabulary.
    badge_fallback: Style,
    /// Ordered colour palette used for vocabulary-tag badge cycling.
    badge_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The bundled themes are part
    /// of the binary, so this should never happen in practice.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Midnight (dark) theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_midnight() -> Self {
        Self::from_toml_str(MIDNIGHT_THEME_SRC).expect("embedded midnight theme must be valid TOML")
    }

    /// Resolve a theme by user-facing name, falling back to the default for
    /// unknown names.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "midnight" | "dark" => Self::load_midnight(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Returns an error if the string cannot be deserialised into a valid
    /// theme. Unknown keys are ignored so user themes can be forward-compatible
    /// with future theme additions.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            kind_positive: raw.kinds.positive.into_style(),
            kind_constructive: raw.kinds.constructive.into_style(),
            kind_appreciation: raw.kinds.appreciation.into_style(),
            kind_suggestion: raw.kinds.suggestion.into_style(),
            direction_given: raw.directions.given.into_style(),
            direction_received: raw.directions.received.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            badge_fallback: raw.badges.fallback.into_style(),
            badge_palette: raw
                .badges
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    /// Return the [`Style`] for a feedback kind label.
    pub fn kind_style(&self, kind: FeedbackKind) -> Style {
        match kind {
            FeedbackKind::Positive => self.kind_positive,
            FeedbackKind::Constructive => self.kind_constructive,
            FeedbackKind::Appreciation => self.kind_appreciation,
            FeedbackKind::Suggestion => self.kind_suggestion,
        }
    }

    /// Return the [`Style`] for a record's direction marker.
    pub fn direction_style(&self, direction: Direction) -> Style {
        match direction {
            Direction::Given => self.direction_given,
            Direction::Received => self.direction_received,
        }
    }

    /// Return a stable [`Style`] for a category-tag badge.
    ///
    /// Vocabulary tags hash into the badge palette so the same tag always
    /// maps to the same colour within a session. Tags outside the vocabulary
    /// get the fallback style.
    pub fn badge_style(&self, tag: &str) -> Style {
        if self.badge_palette.is_empty() || !CATEGORY_TAGS.contains(&tag) {
            return self.badge_fallback;
        }
        let idx = stable_hash(tag) % self.badge_palette.len();
        Style::default().fg(self.badge_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Simple djb2-style hash that is stable across Rust versions and process
/// restarts, making badge colour assignment deterministic.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
