use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct QuoteComponent;

impl Component for QuoteComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = vec![
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", state.quote.text),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                format!("— {}", state.quote.author),
                Style::default().fg(Color::Gray),
            )),
        ];

        f.render_widget(
            Paragraph::new(Text::from(lines))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}
