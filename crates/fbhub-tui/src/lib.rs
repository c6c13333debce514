//! fbhub TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod seed;
pub mod theme;
pub mod widgets;

pub use app::App;

/// Start the TUI. With `empty` set the store starts blank instead of being
/// seeded with the embedded demonstration records.
pub fn run(empty: bool) -> anyhow::Result<()> {
    let config =
        fbhub_core::config::Config::load().unwrap_or_else(|_| fbhub_core::config::Config::defaults());
    let theme = theme::Theme::by_name(&config.ui.theme);

    let records = if empty {
        Vec::new()
    } else {
        seed::seed_records(chrono::Utc::now())?
    };

    App::new(records, config, theme).run()
}
