//! # Actions
//!
//! Everything that can happen in Reel becomes an `Action`.
//! User presses Enter in the search box? That's `Action::Search(term)`.
//! The OMDb call resolves? That's `Action::SearchCompleted(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` naming the I/O the event loop must
//! perform. No side effects here. Network calls happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: drive `update()` with a scripted action
//! sequence and assert on the resulting state, no terminal or network needed.

use log::{debug, warn};

use crate::core::state::App;
use crate::omdb::{CatalogError, MovieDetail, MovieSummary};

/// Everything that can happen in the app.
#[derive(Debug)]
pub enum Action {
    /// The user submitted a search term. Whitespace-only terms are a no-op.
    Search(String),
    /// A spawned search request resolved.
    SearchCompleted(Result<Vec<MovieSummary>, CatalogError>),
    /// The user asked for the full record of one identifier.
    ViewDetails(String),
    /// A spawned lookup request resolved.
    DetailCompleted(Result<MovieDetail, CatalogError>),
    /// Append a record to favorites unless its id is already present.
    AddFavorite(MovieSummary),
    /// Remove any favorite with this id.
    RemoveFavorite(String),
    Quit,
}

/// I/O the event loop must perform after an `update()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchSearch(String),
    FetchDetail(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Search(term) => {
            let term = term.trim().to_string();
            if term.is_empty() {
                debug!("Ignoring empty search term");
                return Effect::None;
            }
            app.is_loading = true;
            app.error = None;
            app.results.clear();
            app.selected = None;
            app.status_message = format!("Searching for \"{}\"...", term);
            Effect::FetchSearch(term)
        }
        Action::SearchCompleted(Ok(results)) => {
            app.is_loading = false;
            app.status_message = format!("{} result(s)", results.len());
            app.results = results;
            Effect::None
        }
        Action::SearchCompleted(Err(e)) => {
            warn!("Search failed: {}", e);
            app.is_loading = false;
            app.error = Some(e.to_string());
            app.status_message.clear();
            Effect::None
        }
        Action::ViewDetails(id) => {
            app.is_loading = true;
            app.error = None;
            app.status_message = String::from("Fetching details...");
            Effect::FetchDetail(id)
        }
        Action::DetailCompleted(Ok(detail)) => {
            app.is_loading = false;
            app.status_message = format!("Viewing {}", detail.title);
            app.selected = Some(detail);
            Effect::None
        }
        Action::DetailCompleted(Err(e)) => {
            // The previous selection is deliberately left in place.
            warn!("Detail fetch failed: {}", e);
            app.is_loading = false;
            app.error = Some(e.to_string());
            Effect::None
        }
        Action::AddFavorite(movie) => {
            let title = movie.title.clone();
            if app.favorites.add(movie) {
                app.status_message = format!("Added {} to favorites", title);
            }
            Effect::None
        }
        Action::RemoveFavorite(id) => {
            app.favorites.remove(&id);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
