//! # DetailPanel Component
//!
//! Full record of the currently selected movie: title, year, genre, rating,
//! wrapped plot synopsis, poster URL, and the favorite toggle hint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::omdb::{MovieDetail, poster_or_placeholder};
use crate::tui::component::Component;

/// Stateless: created fresh each frame from the current selection.
pub struct DetailPanel<'a> {
    pub detail: Option<&'a MovieDetail>,
    pub is_favorite: bool,
    pub focused: bool,
}

fn label(name: &str) -> Span<'static> {
    Span::styled(
        format!("{name}: "),
        Style::default().add_modifier(Modifier::BOLD),
    )
}

impl Component for DetailPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title("Details");

        let Some(detail) = self.detail else {
            let placeholder = Paragraph::new("Select a result and press Enter to view details")
                .block(block)
                .style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(placeholder, area);
            return;
        };

        let toggle_hint = if self.is_favorite {
            "[f] remove from favorites"
        } else {
            "[f] add to favorites"
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("{} ({})", detail.title, detail.year),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![label("Genre"), Span::raw(detail.genre.as_str())]),
            Line::from(vec![
                label("IMDb rating"),
                Span::raw(detail.imdb_rating.as_str()),
            ]),
            Line::from(vec![
                label("Poster"),
                Span::styled(
                    poster_or_placeholder(&detail.poster),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
            Line::from(vec![label("Plot"), Span::raw(detail.plot.as_str())]),
            Line::from(""),
            Line::from(Span::styled(
                toggle_hint,
                Style::default().fg(Color::Yellow),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
