//! # Application State
//!
//! Core session state for Reel. This module contains domain data only -
//! no TUI-specific types. Presentation state (focus, list highlights, the
//! search box buffer) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn MovieProvider>  // catalog backend
//! ├── results: Vec<MovieSummary>        // current search results
//! ├── selected: Option<MovieDetail>     // detail panel contents
//! ├── favorites: Favorites              // session-local favorites
//! ├── error: Option<String>             // error message
//! ├── is_loading: bool                  // a request is outstanding
//! └── status_message: String            // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::favorites::Favorites;
use crate::omdb::{MovieDetail, MovieProvider, MovieSummary};

pub struct App {
    pub provider: Arc<dyn MovieProvider>,
    pub results: Vec<MovieSummary>,
    pub selected: Option<MovieDetail>,
    pub favorites: Favorites,
    pub error: Option<String>,
    pub is_loading: bool,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            provider,
            results: Vec::new(),
            selected: None,
            favorites: Favorites::new(),
            error: None,
            is_loading: false,
            status_message: String::from("Type a title and press Enter to search"),
        }
    }

    /// True when the given identifier is already in favorites. Drives the
    /// add/remove toggle in the results and detail panels.
    pub fn is_favorite(&self, imdb_id: &str) -> bool {
        self.favorites.contains(imdb_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.results.is_empty());
        assert!(app.selected.is_none());
        assert!(app.favorites.is_empty());
        assert!(app.error.is_none());
        assert!(!app.is_loading);
        assert_eq!(app.status_message, "Type a title and press Enter to search");
    }

    #[test]
    fn test_is_favorite_tracks_collection() {
        let mut app = test_app();
        assert!(!app.is_favorite("tt0096895"));
        app.favorites
            .add(crate::test_support::summary("tt0096895", "Batman"));
        assert!(app.is_favorite("tt0096895"));
    }
}
