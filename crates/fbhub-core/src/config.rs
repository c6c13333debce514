//! Configuration types for fbhub.
//!
//! [`Config::load`] reads `~/.config/fbhub/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
theme                   = "default"
show_timestamps         = true
timestamp_format        = "%b %d %H:%M"
detail_timestamp_format = "%A, %B %d, %Y %H:%M"
recent_count            = 3
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/fbhub/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_detail_timestamp_format")]
    pub detail_timestamp_format: String,
    /// How many records the "Recent" pane shows.
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

fn default_theme() -> String { "default".to_string() }
fn default_show_timestamps() -> bool { true }
fn default_timestamp_format() -> String { "%b %d %H:%M".to_string() }
fn default_detail_timestamp_format() -> String { "%A, %B %d, %Y %H:%M".to_string() }
fn default_recent_count() -> usize { 3 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_timestamps: default_show_timestamps(),
            timestamp_format: default_timestamp_format(),
            detail_timestamp_format: default_detail_timestamp_format(),
            recent_count: default_recent_count(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/fbhub/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fbhub")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.ui.theme, "default");
        assert!(cfg.ui.show_timestamps);
        assert_eq!(cfg.ui.recent_count, 3);
        assert_eq!(cfg.ui.timestamp_format, "%b %d %H:%M");
    }
}
