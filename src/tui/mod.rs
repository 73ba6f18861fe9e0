//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading** (spinner visible): draws every ~80ms for smooth animation.
//! - **Idle**: sleeps up to 250ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on
//! every `draw()` call, making blinking cursors appear erratic during
//! continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::SetCursorStyle;
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::omdb::{MovieProvider, MovieSummary, OmdbClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FavoritesPanelState, MovieListState, SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane keyboard events are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
    Detail,
    Favorites,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Detail,
            Focus::Detail => Focus::Favorites,
            Focus::Favorites => Focus::Search,
        }
    }

    fn prev(self) -> Focus {
        match self {
            Focus::Search => Focus::Favorites,
            Focus::Results => Focus::Search,
            Focus::Detail => Focus::Results,
            Focus::Favorites => Focus::Detail,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub results: MovieListState,
    pub favorites: FavoritesPanelState,
    pub focus: Focus,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            results: MovieListState::new(),
            favorites: FavoritesPanelState::new(),
            focus: Focus::Search, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), SetCursorStyle::SteadyBlock)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider: Arc<dyn MovieProvider> = Arc::new(OmdbClient::new(
        config.api_key.clone(),
        Some(config.base_url.clone()),
    ));
    let mut app = App::new(provider);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for completion actions from spawned fetch tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync SearchBox props with TUI state
        tui.search_box.focused = matches!(tui.focus, Focus::Search);

        if app.is_loading {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while the spinner animates, long when idle
        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            match event {
                TuiEvent::FocusNext => tui.focus = tui.focus.next(),
                TuiEvent::FocusPrev => tui.focus = tui.focus.prev(),
                TuiEvent::Escape => {
                    if dispatch(&mut app, Action::Quit, &tx) {
                        should_quit = true;
                    }
                }
                other => handle_focused_event(&mut app, &mut tui, other, &tx),
            }
        }

        if should_quit {
            break;
        }

        // Handle completion actions from spawned fetch tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);

            // A fresh result set moves focus to the list, like the original
            // app's jump from the search box to the result cards.
            let search_succeeded = matches!(action, Action::SearchCompleted(Ok(_)));

            if dispatch(&mut app, action, &tx) {
                should_quit = true;
                break;
            }

            if search_succeeded {
                tui.focus = Focus::Results;
                tui.results.select_first(app.results.len());
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run an action through the reducer and execute the resulting effect.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::FetchSearch(term) => spawn_search(app, term, tx.clone()),
        Effect::FetchDetail(id) => spawn_lookup(app, id, tx.clone()),
        Effect::Quit => return true,
        Effect::None => {}
    }
    false
}

/// Route an event to the focused pane and map it to core actions.
fn handle_focused_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
) {
    match tui.focus {
        Focus::Search => {
            if let Some(SearchEvent::Submit(term)) = tui.search_box.handle_event(&event) {
                dispatch(app, Action::Search(term), tx);
                // The reducer cleared the results; drop any stale highlight.
                tui.results.clamp(app.results.len());
            }
        }
        Focus::Results => match event {
            TuiEvent::Up => tui.results.select_prev(app.results.len()),
            TuiEvent::Down => tui.results.select_next(app.results.len()),
            TuiEvent::Submit => {
                if let Some(movie) = tui.results.selected().and_then(|i| app.results.get(i)) {
                    let id = movie.imdb_id.clone();
                    dispatch(app, Action::ViewDetails(id), tx);
                }
            }
            TuiEvent::InputChar('f') => {
                if let Some(movie) =
                    tui.results.selected().and_then(|i| app.results.get(i))
                {
                    let action = toggle_favorite(app, movie.clone());
                    dispatch(app, action, tx);
                    tui.favorites.clamp(app.favorites.len());
                }
            }
            _ => {}
        },
        Focus::Detail => {
            if let TuiEvent::InputChar('f') = event {
                if let Some(detail) = app.selected.as_ref() {
                    let action = toggle_favorite(app, MovieSummary::from(detail));
                    dispatch(app, action, tx);
                    tui.favorites.clamp(app.favorites.len());
                }
            }
        }
        Focus::Favorites => match event {
            TuiEvent::Up => tui.favorites.select_prev(app.favorites.len()),
            TuiEvent::Down => tui.favorites.select_next(app.favorites.len()),
            TuiEvent::InputChar('d') | TuiEvent::Delete | TuiEvent::Submit => {
                if let Some(movie) =
                    tui.favorites.selected().and_then(|i| app.favorites.get(i))
                {
                    let id = movie.imdb_id.clone();
                    dispatch(app, Action::RemoveFavorite(id), tx);
                    tui.favorites.clamp(app.favorites.len());
                }
            }
            _ => {}
        },
    }
}

/// Add when absent, remove when present.
fn toggle_favorite(app: &App, movie: MovieSummary) -> Action {
    if app.is_favorite(&movie.imdb_id) {
        Action::RemoveFavorite(movie.imdb_id)
    } else {
        Action::AddFavorite(movie)
    }
}

fn spawn_search(app: &App, term: String, tx: mpsc::Sender<Action>) {
    info!("Spawning search request: {}", term);

    let provider = app.provider.clone();
    tokio::spawn(async move {
        let result = provider.search_movies(&term).await;
        if tx.send(Action::SearchCompleted(result)).is_err() {
            warn!("Failed to send search result: receiver dropped");
        }
    });
}

fn spawn_lookup(app: &App, id: String, tx: mpsc::Sender<Action>) {
    info!("Spawning lookup request: {}", id);

    let provider = app.provider.clone();
    tokio::spawn(async move {
        let result = provider.movie_by_id(&id).await;
        if tx.send(Action::DetailCompleted(result)).is_err() {
            warn!("Failed to send lookup result: receiver dropped");
        }
    });
}
