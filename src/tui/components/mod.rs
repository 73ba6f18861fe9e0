//! # TUI Components
//!
//! All UI components for the terminal interface. Two patterns:
//!
//! - **Stateless** (props-based): `TitleBar`, `DetailPanel`. Created fresh
//!   each frame with the data they need.
//! - **Stateful** (event-driven): `SearchBox` owns the input buffer and
//!   cursor; `MovieList` and `FavoritesPanel` wrap persistent `ListState`
//!   highlights held in `TuiState`.
//!
//! Each component file contains its state types, rendering logic, event
//! handling, and tests.

pub mod detail_panel;
pub mod favorites_panel;
pub mod movie_list;
pub mod search_box;
pub mod title_bar;

pub use detail_panel::DetailPanel;
pub use favorites_panel::{FavoritesPanel, FavoritesPanelState};
pub use movie_list::{MovieList, MovieListState};
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
