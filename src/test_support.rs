//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::state::App;
use crate::omdb::{CatalogError, MovieDetail, MovieProvider, MovieSummary};

/// A provider serving canned responses, for tests that never hit the network.
#[derive(Default)]
pub struct StubProvider {
    pub results: Vec<MovieSummary>,
    pub detail: Option<MovieDetail>,
}

#[async_trait]
impl MovieProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn search_movies(&self, _term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        if self.results.is_empty() {
            Err(CatalogError::NotFound("No movies found!".to_string()))
        } else {
            Ok(self.results.clone())
        }
    }

    async fn movie_by_id(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        self.detail
            .clone()
            .filter(|d| d.imdb_id == id)
            .ok_or_else(|| CatalogError::NotFound("Movie not found!".to_string()))
    }
}

/// Creates a test App with an empty StubProvider.
pub fn test_app() -> App {
    App::new(Arc::new(StubProvider::default()))
}

/// A summary record with a poster-less sentinel, for reducer and UI tests.
pub fn summary(imdb_id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: "1989".to_string(),
        poster: "N/A".to_string(),
    }
}

/// A detail record matching `summary()`'s shape.
pub fn detail(imdb_id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: "2005".to_string(),
        genre: "Action, Crime, Drama".to_string(),
        imdb_rating: "8.2".to_string(),
        plot: "A young Bruce Wayne travels the world.".to_string(),
        poster: "N/A".to_string(),
    }
}
