//! # MovieList Component
//!
//! Scrollable list of search results. Each entry shows the title, year, a
//! favorite marker, and the poster URL (placeholder substituted when the
//! upstream field is the `"N/A"` sentinel).
//!
//! `MovieList` is a transient component created each frame; it wraps
//! `&mut MovieListState` (the persistent highlight, kept in `TuiState`)
//! plus the result slice and favorites as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::favorites::Favorites;
use crate::omdb::{MovieSummary, poster_or_placeholder};
use crate::tui::component::Component;

/// Highlight state for the result list. Persisted in the parent TuiState.
#[derive(Default)]
pub struct MovieListState {
    pub list_state: ListState,
}

impl MovieListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Reset the highlight to the top entry (or nothing when empty).
    pub fn select_first(&mut self, len: usize) {
        self.list_state.select(if len > 0 { Some(0) } else { None });
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(prev));
    }

    /// Keep the highlight in bounds after the list shrinks.
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

pub struct MovieList<'a> {
    pub movies: &'a [MovieSummary],
    pub favorites: &'a Favorites,
    pub focused: bool,
    pub state: &'a mut MovieListState,
}

fn entry_text<'a>(movie: &'a MovieSummary, is_favorite: bool) -> Text<'a> {
    let marker = if is_favorite { "★ " } else { "  " };
    let title_line = Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{} ({})", movie.title, movie.year),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let poster_line = Line::from(Span::styled(
        format!("  {}", poster_or_placeholder(&movie.poster)),
        Style::default().fg(Color::DarkGray),
    ));
    Text::from(vec![title_line, poster_line])
}

impl Component for MovieList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title("Results");

        if self.movies.is_empty() {
            let placeholder = Paragraph::new("No results")
                .block(block)
                .style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(placeholder, area);
            return;
        }

        let items: Vec<ListItem> = self
            .movies
            .iter()
            .map(|movie| ListItem::new(entry_text(movie, self.favorites.contains(&movie.imdb_id))))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::summary;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(movies: &[MovieSummary], favorites: &Favorites) -> String {
        let mut state = MovieListState::new();
        let backend = TestBackend::new(70, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut list = MovieList {
                    movies,
                    favorites,
                    focused: true,
                    state: &mut state,
                };
                list.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let text = render_to_text(&[], &Favorites::new());
        assert!(text.contains("No results"));
    }

    #[test]
    fn test_entries_show_title_year_and_placeholder_poster() {
        let movies = vec![summary("tt0096895", "Batman")];
        let text = render_to_text(&movies, &Favorites::new());
        assert!(text.contains("Batman (1989)"));
        assert!(text.contains("via.placeholder.com"));
    }

    #[test]
    fn test_real_poster_url_passes_through() {
        let mut movie = summary("tt0096895", "Batman");
        movie.poster = "https://example.com/batman.jpg".to_string();
        let text = render_to_text(&[movie], &Favorites::new());
        assert!(text.contains("https://example.com/batman.jpg"));
        assert!(!text.contains("via.placeholder.com"));
    }

    #[test]
    fn test_favorited_entry_gets_a_star() {
        let movies = vec![summary("tt0096895", "Batman")];
        let mut favorites = Favorites::new();
        favorites.add(summary("tt0096895", "Batman"));
        let text = render_to_text(&movies, &favorites);
        assert!(text.contains('★'));
    }

    #[test]
    fn test_selection_navigation_stays_in_bounds() {
        let mut state = MovieListState::new();
        state.select_next(2);
        assert_eq!(state.selected(), Some(0));
        state.select_next(2);
        assert_eq!(state.selected(), Some(1));
        state.select_next(2);
        assert_eq!(state.selected(), Some(1));
        state.select_prev(2);
        assert_eq!(state.selected(), Some(0));
        state.select_prev(2);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut state = MovieListState::new();
        state.select_next(5);
        state.select_next(5);
        state.select_next(5);
        assert_eq!(state.selected(), Some(2));

        state.clamp(2);
        assert_eq!(state.selected(), Some(1));

        state.clamp(0);
        assert_eq!(state.selected(), None);
    }
}
