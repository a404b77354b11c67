//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or a
//!   completed lookup arriving on the action channel.
//!
//! ## Input Modes
//!
//! `Input` sends keys to the address bar. `Browse` drives the result panel:
//! tabs, list cursor, detail drill-down. A successful submit switches to
//! `Browse`; a failed lookup hands the keyboard back to the address bar, and
//! `/` or `i` does the same by hand.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::search::SearchState;
use crate::core::selection::ResultTab;
use crate::core::state::App;
use crate::profile::{FetchError, HttpProfileClient, ProfileFetcher, ProfileRequest};
use crate::tui::component::EventHandler;
use crate::tui::components::{AddressBar, AddressEvent, ResultListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing into the address bar. Esc switches to Browse once there is a result.
    Input,
    /// Navigating tabs and lists. `/` or `i` switches back to Input.
    Browse,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub address_bar: AddressBar,
    pub input_mode: InputMode,
    pub list: ResultListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            address_bar: AddressBar::new(),
            input_mode: InputMode::Input, // User expects to type immediately
            list: ResultListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for address editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Applies an action and performs whatever I/O its effect asks for.
/// Returns true when the app should exit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let before = (app.results.active_tab(), app.search.profile().cloned());
    let effect = update(app, action);

    // Fresh tab or fresh result: the list cursor starts at the top again
    let after = (app.results.active_tab(), app.search.profile().cloned());
    let same_profile = match (&before.1, &after.1) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    };
    if before.0 != after.0 || !same_profile {
        tui.list.reset();
    }

    // Nothing to browse after a failure; the error view asks for a new address
    if matches!(app.search.state(), SearchState::Error(_)) {
        tui.input_mode = InputMode::Input;
    }

    match effect {
        Effect::Quit => true,
        Effect::SpawnSearch(request) => {
            spawn_search(app, request, tx.clone());
            false
        }
        Effect::None => false,
    }
}

/// Translates a Browse-mode key into an action, or handles it locally.
fn browse_action(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let results = &app.results;
    if results.detail().is_some() {
        return match event {
            TuiEvent::Escape | TuiEvent::Backspace => Some(Action::Back),
            TuiEvent::InputChar('m') => Some(Action::ShowOnMap),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar('/') | TuiEvent::InputChar('i') => {
                tui.input_mode = InputMode::Input;
                None
            }
            _ => None,
        };
    }

    let tab = results.active_tab();
    match event {
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('/') | TuiEvent::InputChar('i') | TuiEvent::Escape => {
            tui.input_mode = InputMode::Input;
            None
        }
        TuiEvent::InputChar(c @ '1'..='5') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            ResultTab::ALL.get(index).copied().map(Action::SelectTab)
        }
        TuiEvent::NextTab => Some(Action::NextTab),
        TuiEvent::PrevTab => Some(Action::PrevTab),
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
            tui.list.move_up();
            None
        }
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
            let len = app.profile().map_or(0, |profile| results.list_len(profile, tab));
            tui.list.move_down(len);
            None
        }
        TuiEvent::Submit if tab.is_list() => app
            .profile()
            .and_then(|profile| results.item_at(profile, tab, tui.list.cursor))
            .map(Action::SelectItem),
        _ => None,
    }
}

/// Build the profile fetcher for a resolved config.
pub fn build_fetcher(config: &ResolvedConfig) -> Arc<dyn ProfileFetcher> {
    Arc::new(HttpProfileClient::new(Some(config.api_base_url.clone())))
}

pub fn run(config: ResolvedConfig, initial_address: Option<String>) -> std::io::Result<()> {
    let fetcher = build_fetcher(&config);
    info!("Using {} fetcher at {}", fetcher.name(), config.api_base_url);
    let mut app = App::from_config(fetcher, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if let Some(address) = initial_address {
        tui.address_bar = AddressBar::with_text(&address);
        dispatch(&mut app, &mut tui, Action::Submit(address), &tx);
        if app.search.is_loading() {
            tui.input_mode = InputMode::Browse;
        }
    }

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        let animating = app.search.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if dispatch(&mut app, &mut tui, Action::Quit, &tx) {
                    break 'event_loop;
                }
                continue;
            }

            match tui.input_mode {
                InputMode::Input => {
                    if matches!(event, TuiEvent::Escape) {
                        if app.profile().is_some() {
                            tui.input_mode = InputMode::Browse;
                        }
                        continue;
                    }
                    if let Some(AddressEvent::Submit(text)) = tui.address_bar.handle_event(&event) {
                        dispatch(&mut app, &mut tui, Action::Submit(text), &tx);
                        if app.search.is_loading() {
                            tui.input_mode = InputMode::Browse;
                        }
                    }
                }
                InputMode::Browse => {
                    if let Some(action) = browse_action(&app, &mut tui, &event)
                        && dispatch(&mut app, &mut tui, action, &tx)
                    {
                        break 'event_loop;
                    }
                }
            }
        }

        // Completed lookups from the background task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) {
                break 'event_loop;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs one lookup on the tokio runtime and posts the outcome back as an Action.
fn spawn_search(app: &App, request: ProfileRequest, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning profile lookup via {} (radius={:?})",
        app.fetcher.name(),
        request.radius_km
    );
    let fetcher = app.fetcher.clone();
    let timeout = app.request_timeout;

    tokio::spawn(async move {
        let started = Instant::now();
        let result = match tokio::time::timeout(timeout, fetcher.fetch_profile(&request)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        };
        match &result {
            Ok(_) => info!("Lookup finished in {:?}", started.elapsed()),
            Err(e) => warn!("Lookup failed after {:?}: {}", started.elapsed(), e),
        }
        if tx.send(Action::from_fetch(result)).is_err() {
            warn!("Failed to send lookup result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::SearchFailure;
    use crate::core::selection::DetailSelection;
    use crate::test_support::{sample_profile, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn browsing() -> (App, TuiState, mpsc::Sender<Action>, mpsc::Receiver<Action>) {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();
        update(&mut app, Action::Submit("1 Main St".to_string()));
        dispatch(
            &mut app,
            &mut tui,
            Action::SearchSucceeded(Box::new(sample_profile())),
            &tx,
        );
        tui.input_mode = InputMode::Browse;
        (app, tui, tx, rx)
    }

    fn press(app: &mut App, tui: &mut TuiState, tx: &mpsc::Sender<Action>, event: TuiEvent) -> bool {
        match browse_action(app, tui, &event) {
            Some(action) => dispatch(app, tui, action, tx),
            None => false,
        }
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let (mut app, mut tui, tx, _rx) = browsing();
        press(&mut app, &mut tui, &tx, TuiEvent::InputChar('3'));
        assert_eq!(app.results.active_tab(), ResultTab::Schools);
        press(&mut app, &mut tui, &tx, TuiEvent::InputChar('9'));
        assert_eq!(app.results.active_tab(), ResultTab::Schools);
    }

    #[test]
    fn test_enter_opens_item_under_cursor() {
        let (mut app, mut tui, tx, _rx) = browsing();
        press(&mut app, &mut tui, &tx, TuiEvent::InputChar('4'));
        press(&mut app, &mut tui, &tx, TuiEvent::CursorDown);
        press(&mut app, &mut tui, &tx, TuiEvent::Submit);

        // Display order is restaurant, cafe, gym
        match app.results.detail() {
            Some(DetailSelection::Place(place)) => assert_eq!(place.name, "Bean"),
            other => panic!("expected place detail, got {other:?}"),
        }
        assert!(app.results.focus().is_some());

        press(&mut app, &mut tui, &tx, TuiEvent::Escape);
        assert!(app.results.detail().is_none());
        assert_eq!(app.results.active_tab(), ResultTab::Places);
    }

    #[test]
    fn test_tab_change_resets_cursor() {
        let (mut app, mut tui, tx, _rx) = browsing();
        press(&mut app, &mut tui, &tx, TuiEvent::InputChar('4'));
        press(&mut app, &mut tui, &tx, TuiEvent::CursorDown);
        assert_eq!(tui.list.cursor, 1);
        press(&mut app, &mut tui, &tx, TuiEvent::NextTab);
        assert_eq!(app.results.active_tab(), ResultTab::News);
        assert_eq!(tui.list.cursor, 0);
    }

    #[test]
    fn test_enter_on_card_tab_does_nothing() {
        let (mut app, mut tui, tx, _rx) = browsing();
        press(&mut app, &mut tui, &tx, TuiEvent::Submit);
        assert!(app.results.detail().is_none());
    }

    #[test]
    fn test_slash_returns_to_input() {
        let (mut app, mut tui, tx, _rx) = browsing();
        press(&mut app, &mut tui, &tx, TuiEvent::InputChar('/'));
        assert_eq!(tui.input_mode, InputMode::Input);
    }

    #[test]
    fn test_failed_search_returns_keyboard_to_address_bar() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, _rx) = mpsc::channel();
        update(&mut app, Action::Submit("nowhere".to_string()));
        tui.input_mode = InputMode::Browse;

        dispatch(
            &mut app,
            &mut tui,
            Action::SearchFailed(SearchFailure::AddressNotFound),
            &tx,
        );
        assert_eq!(tui.input_mode, InputMode::Input);

        // Next frame re-enables the bar; typed keys are text, not browse shortcuts
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, 0)).unwrap();
        assert!(!tui.address_bar.disabled);
        assert_eq!(
            tui.address_bar.handle_event(&TuiEvent::InputChar('q')),
            Some(AddressEvent::ContentChanged)
        );
        assert_eq!(tui.address_bar.buffer, "q");
    }

    #[test]
    fn test_browse_keys_without_profile_are_inert() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Submit("1 Main St".to_string()));
        tui.input_mode = InputMode::Browse;
        assert_eq!(browse_action(&app, &mut tui, &TuiEvent::CursorDown), None);
        assert_eq!(tui.list.cursor, 0);
        assert_eq!(browse_action(&app, &mut tui, &TuiEvent::Submit), None);
    }

    #[test]
    fn test_build_fetcher_uses_http_client() {
        let fetcher = build_fetcher(&ResolvedConfig::default());
        assert_eq!(fetcher.name(), "http");
    }

    #[test]
    fn test_q_quits() {
        let (mut app, mut tui, tx, _rx) = browsing();
        assert!(press(&mut app, &mut tui, &tx, TuiEvent::InputChar('q')));
    }

    #[tokio::test]
    async fn test_spawned_search_reports_failure() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();
        dispatch(&mut app, &mut tui, Action::Submit("1 Main St".to_string()), &tx);
        assert!(app.search.is_loading());

        // NoopFetcher fails immediately with a network error
        let action = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(action, Action::SearchFailed(SearchFailure::FetchFailed));
    }
}
