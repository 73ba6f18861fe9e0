//! # FavoritesPanel Component
//!
//! The session-local favorites list. Always visible; shows a literal
//! empty-state message when nothing has been favorited yet.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::favorites::Favorites;
use crate::omdb::poster_or_placeholder;
use crate::tui::component::Component;

pub const EMPTY_FAVORITES_MESSAGE: &str = "No favorite movies yet.";

/// Highlight state for the favorites list. Persisted in the parent TuiState.
#[derive(Default)]
pub struct FavoritesPanelState {
    pub list_state: ListState,
}

impl FavoritesPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
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

    /// Keep the highlight in bounds after a removal.
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

pub struct FavoritesPanel<'a> {
    pub favorites: &'a Favorites,
    pub focused: bool,
    pub state: &'a mut FavoritesPanelState,
}

impl Component for FavoritesPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title(format!("Favorites ({})", self.favorites.len()));

        if self.favorites.is_empty() {
            let placeholder = Paragraph::new(EMPTY_FAVORITES_MESSAGE)
                .block(block)
                .style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(placeholder, area);
            return;
        }

        let items: Vec<ListItem> = self
            .favorites
            .iter()
            .map(|movie| {
                let title_line = Line::from(Span::styled(
                    format!("{} ({})", movie.title, movie.year),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                let poster_line = Line::from(Span::styled(
                    format!("  {}", poster_or_placeholder(&movie.poster)),
                    Style::default().fg(Color::DarkGray),
                ));
                ListItem::new(Text::from(vec![title_line, poster_line]))
            })
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

    fn render_to_text(favorites: &Favorites) -> String {
        let mut state = FavoritesPanelState::new();
        let backend = TestBackend::new(70, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut panel = FavoritesPanel {
                    favorites,
                    focused: false,
                    state: &mut state,
                };
                panel.render(f, f.area());
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
    fn test_empty_state_message() {
        let text = render_to_text(&Favorites::new());
        assert!(text.contains(EMPTY_FAVORITES_MESSAGE));
        assert!(text.contains("Favorites (0)"));
    }

    #[test]
    fn test_entries_are_listed_in_insertion_order() {
        let mut favorites = Favorites::new();
        favorites.add(summary("tt0096895", "Batman"));
        favorites.add(summary("tt0372784", "Batman Begins"));

        let text = render_to_text(&favorites);

        assert!(text.contains("Favorites (2)"));
        let first = text.find("Batman (1989)").unwrap();
        let second = text.find("Batman Begins").unwrap();
        assert!(first < second);
        assert!(!text.contains(EMPTY_FAVORITES_MESSAGE));
    }

    #[test]
    fn test_poster_placeholder_substitution() {
        let mut favorites = Favorites::new();
        favorites.add(summary("tt0096895", "Batman"));
        let text = render_to_text(&favorites);
        assert!(text.contains("via.placeholder.com"));
    }
}
