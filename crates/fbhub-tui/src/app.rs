//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! The store is the single source of truth; every pane renders a derivation
//! of it computed fresh on each frame (filtered history, recent slice,
//! weekly stats). Nothing is cached across events.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        detail::DetailPopup,
        filter_bar::{FilterBar, FilterBarState},
        form::{Form, FormAction, FormState},
        help::HelpPopup,
        history::{History, HistoryState},
        recent::{Recent, RecentState},
        stats_bar::StatsBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fbhub_core::{
    config::Config,
    view::{self, distinct_categories},
    Direction, FeedbackFilter, FeedbackRecord, FeedbackStore,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Recent,
    History,
    Search,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub store: FeedbackStore,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,

    pub recent: RecentState,
    pub history: HistoryState,
    pub search: FilterBarState,
    pub direction_filter: Option<Direction>,
    pub category_filter: Option<String>,

    /// Open modal form, if any. Takes over all input while present.
    pub form: Option<FormState>,
    /// Open detail popup, if any.
    pub detail: Option<FeedbackRecord>,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub show_timestamps: bool,
    pub quit: bool,
}

impl AppState {
    /// The conjunctive filter currently in effect across the history pane.
    pub fn current_filter(&self) -> FeedbackFilter {
        FeedbackFilter {
            direction: self.direction_filter,
            category: self.category_filter.clone(),
            search: self.search.query.clone(),
        }
    }

    /// Filtered history, most recent first.
    pub fn visible_history(&self) -> Vec<&FeedbackRecord> {
        let mut list = view::filter(self.store.records(), &self.current_filter());
        list.sort_by(|a, b| b.ts.cmp(&a.ts));
        list
    }

    /// Advance the direction filter: all → given → received → all.
    fn cycle_direction(&mut self) {
        self.direction_filter = match self.direction_filter {
            None => Some(Direction::Given),
            Some(Direction::Given) => Some(Direction::Received),
            Some(Direction::Received) => None,
        };
        tracing::debug!(filter = ?self.direction_filter, "direction filter");
    }

    /// Advance the category filter through every tag present in the store.
    fn cycle_category(&mut self) {
        let tags = distinct_categories(self.store.records());
        if tags.is_empty() {
            self.category_filter = None;
            return;
        }
        self.category_filter = match &self.category_filter {
            None => Some(tags[0].clone()),
            Some(current) => {
                let pos = tags.iter().position(|t| t == current);
                match pos {
                    Some(i) if i + 1 < tags.len() => Some(tags[i + 1].clone()),
                    _ => None,
                }
            }
        };
        tracing::debug!(filter = ?self.category_filter, "category filter");
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(records: Vec<FeedbackRecord>, config: Config, theme: Theme) -> Self {
        let show_timestamps = config.ui.show_timestamps;
        let state = AppState {
            store: FeedbackStore::seeded(records),
            focus: Focus::History,
            prev_focus: Focus::History,
            theme,
            config,
            recent: RecentState::default(),
            history: HistoryState::default(),
            search: FilterBarState::default(),
            direction_filter: None,
            category_filter: None,
            form: None,
            detail: None,
            show_help: false,
            command_bar: CommandBarState::default(),
            show_timestamps,
            quit: false,
        };

        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(&self.state) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Open form takes over all input. The form uses the insert-mode key
        // map throughout, so Quit here can only mean Ctrl+c.
        if let Some(form) = s.form.as_mut() {
            if event == AppEvent::Quit {
                tracing::debug!("quit (form open)");
                s.quit = true;
                return;
            }
            match form.handle(&event, chrono::Utc::now()) {
                FormAction::Noop => {}
                FormAction::Cancel => {
                    tracing::debug!("form cancelled");
                    s.form = None;
                }
                FormAction::Submit(record) => {
                    s.store.add(record);
                    s.form = None;
                }
            }
            return;
        }

        // Detail popup: any close key dismisses it.
        if s.detail.is_some() {
            match event {
                AppEvent::Escape | AppEvent::Enter | AppEvent::Quit => {
                    s.detail = None;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events. Quit can only be Ctrl+c here
        // (the command bar takes the insert-mode key map).
        if s.focus == Focus::Command {
            match event {
                AppEvent::Quit => {
                    tracing::debug!("quit (command mode)");
                    s.quit = true;
                }
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the search bar)
            AppEvent::Char('?') if s.focus != Focus::Search => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the search bar)
            AppEvent::Char(':') if s.focus != Focus::Search => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from the search bar
            AppEvent::Escape => {
                if s.focus == Focus::Search {
                    tracing::debug!("focus: Search -> History");
                    s.focus = Focus::History;
                }
            }

            // Tab-cycle focus: Recent → History → Search → Recent
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Recent => Focus::History,
                    Focus::History => Focus::Search,
                    Focus::Search | Focus::Command => Focus::Recent,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            // Jump to the search bar
            AppEvent::SearchFocus => {
                tracing::debug!("focus -> Search");
                s.focus = Focus::Search;
            }

            AppEvent::NewFeedback => {
                tracing::debug!("opening feedback form");
                s.form = Some(FormState::new());
            }

            // Filter shortcuts work regardless of focus
            AppEvent::CycleDirection => {
                s.cycle_direction();
                let len = s.visible_history().len();
                s.history.clamp(len);
            }
            AppEvent::CycleCategory => {
                s.cycle_category();
                let len = s.visible_history().len();
                s.history.clamp(len);
            }
            AppEvent::ClearFilters => {
                tracing::debug!("clearing filters");
                s.direction_filter = None;
                s.category_filter = None;
                s.search.clear();
            }

            // Open the selected record
            AppEvent::Enter => {
                let record = match s.focus {
                    Focus::History => {
                        s.visible_history().get(s.history.cursor).copied().cloned()
                    }
                    Focus::Recent => {
                        let n = s.config.ui.recent_count;
                        view::recent(s.store.records(), n)
                            .get(s.recent.cursor)
                            .copied()
                            .cloned()
                    }
                    _ => None,
                };
                if let Some(record) = record {
                    tracing::debug!(id = %record.id, "opening detail popup");
                    s.detail = Some(record);
                }
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when keystrokes should produce characters rather than
/// trigger shortcuts. The whole form counts as a typing surface — even its
/// selector fields — so stray letters never fire global shortcuts while a
/// submission is in progress; only Ctrl+c keeps its quit binding.
fn is_insert_mode(s: &AppState) -> bool {
    s.form.is_some() || matches!(s.focus, Focus::Search | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::History => {
            let len = s.visible_history().len();
            s.history.handle(&event, len);
        }
        Focus::Recent => {
            let len = view::recent(s.store.records(), s.config.ui.recent_count).len();
            s.recent.handle(&event, len);
        }
        Focus::Search => {
            s.search.handle(&event);
            let len = s.visible_history().len();
            s.history.clamp(len);
        }
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line stats bar | 3-line search bar | body
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    // Horizontal body: recent slice | filtered history
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Fill(1)])
        .split(vert[2]);

    let now = chrono::Utc::now();
    let stats = view::compute_stats(state.store.records(), now);
    let recent_list = view::recent(state.store.records(), state.config.ui.recent_count);
    let history_list = state.visible_history();
    let filter = state.current_filter();

    frame.render_widget(StatsBar::new(stats, &state.theme), vert[0]);
    frame.render_widget(
        FilterBar::new(
            &state.search,
            &filter,
            state.focus == Focus::Search,
            &state.theme,
        ),
        vert[1],
    );
    frame.render_widget(
        Recent::new(
            &recent_list,
            &state.recent,
            state.focus == Focus::Recent,
            &state.theme,
        ),
        horiz[0],
    );
    frame.render_widget(
        History::new(
            &history_list,
            &state.history,
            state.focus == Focus::History,
            &state.theme,
            state.show_timestamps,
            &state.config.ui.timestamp_format,
            &filter.search,
        ),
        horiz[1],
    );

    if let Some(record) = &state.detail {
        frame.render_widget(
            DetailPopup::new(record, &state.theme, &state.config.ui.detail_timestamp_format),
            area,
        );
    }

    if let Some(form) = &state.form {
        frame.render_widget(Form::new(form, &state.theme), area);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip search-bar cursor below
    }

    // Position the terminal cursor when the search bar is focused
    if state.focus == Focus::Search && state.form.is_none() {
        let fb = FilterBar::new(&state.search, &filter, true, &state.theme);
        let (cx, cy) = fb.cursor_position(vert[1]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
