//! # TitleBar Component
//!
//! Top status bar: app name, a spinner while a request is outstanding, and
//! the transient status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stateless: all three fields are props from the parent.
pub struct TitleBar {
    pub status_message: String,
    pub is_loading: bool,
    /// Animation frame counter from the event loop; wrapped here.
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(status_message: String, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            status_message,
            is_loading,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.is_loading {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            format!("Reel | {} Loading...", spinner)
        } else if self.status_message.is_empty() {
            String::from("Reel")
        } else {
            format!("Reel | {}", self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
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
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("2 result(s)".to_string(), false, 0);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Reel"));
        assert!(text.contains("2 result(s)"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn test_title_bar_shows_loading_indicator() {
        let mut title_bar = TitleBar::new("ignored while loading".to_string(), true, 3);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("ignored"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(String::new(), false, 0);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Reel"));
        assert!(!text.contains('|'));
    }
}
