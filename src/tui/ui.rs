use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{DetailPanel, FavoritesPanel, MovieList, TitleBar};
use crate::tui::{Focus, TuiState};

/// Compose the whole frame from the current state.
///
/// Every pane renders conditionally on its own state slot: the spinner on
/// the loading flag, the error line on the error slot, the detail panel on
/// the selection, the favorites panel always (with an empty-state message).
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let error_height = if app.error.is_some() { 1 } else { 0 };
    let layout = Layout::vertical([Length(1), Length(3), Length(error_height), Min(0)]);
    let [title_area, search_area, error_area, main_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone(), app.is_loading, spinner_frame)
        .render(frame, title_area);

    tui.search_box.render(frame, search_area);

    if let Some(error_msg) = &app.error {
        let error_line =
            Paragraph::new(error_msg.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, error_area);
    }

    let [results_area, right_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .areas(main_area);
    let [detail_area, favorites_area] =
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(right_area);

    MovieList {
        movies: &app.results,
        favorites: &app.favorites,
        focused: matches!(tui.focus, Focus::Results),
        state: &mut tui.results,
    }
    .render(frame, results_area);

    DetailPanel {
        detail: app.selected.as_ref(),
        is_favorite: app
            .selected
            .as_ref()
            .is_some_and(|d| app.is_favorite(&d.imdb_id)),
        focused: matches!(tui.focus, Focus::Detail),
    }
    .render(frame, detail_area);

    FavoritesPanel {
        favorites: &app.favorites,
        focused: matches!(tui.focus, Focus::Favorites),
        state: &mut tui.favorites,
    }
    .render(frame, favorites_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{summary, test_app};
    use crate::tui::components::favorites_panel::EMPTY_FAVORITES_MESSAGE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui, 0);
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
    fn test_draw_ui_initial_frame() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Reel"));
        assert!(text.contains("Search"));
        assert!(text.contains("Results"));
        assert!(text.contains("Details"));
        assert!(text.contains(EMPTY_FAVORITES_MESSAGE));
    }

    #[test]
    fn test_error_line_is_rendered_verbatim() {
        let mut app = test_app();
        app.error = Some("Movie not found!".to_string());
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Movie not found!"));
    }

    #[test]
    fn test_results_and_favorites_are_rendered() {
        let mut app = test_app();
        app.results.push(summary("tt0096895", "Batman"));
        app.favorites.add(summary("tt0372784", "Batman Begins"));
        let mut tui = TuiState::new();

        let text = render_to_text(&app, &mut tui);

        assert!(text.contains("Batman (1989)"));
        assert!(text.contains("Batman Begins"));
        assert!(text.contains("Favorites (1)"));
        assert!(!text.contains(EMPTY_FAVORITES_MESSAGE));
    }

    #[test]
    fn test_loading_spinner_in_title_bar() {
        let mut app = test_app();
        app.is_loading = true;
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Loading..."));
    }
}
