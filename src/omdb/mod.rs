//! # OMDb Catalog Client
//!
//! The only module that performs network I/O. Two operations against the
//! OMDb API: title search and identifier lookup. The API reports logical
//! failures inside the JSON body (`Response: "False"` plus an `Error`
//! message), which this module translates into [`CatalogError`].

pub mod client;
pub mod types;

pub use client::{CatalogError, DEFAULT_OMDB_BASE_URL, MovieProvider, OmdbClient};
pub use types::{
    MovieDetail, MovieSummary, PLACEHOLDER_POSTER_URL, POSTER_UNAVAILABLE, poster_or_placeholder,
};
