use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct BreatheComponent;

impl Component for BreatheComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Breathe ",
                Style::default().fg(Color::LightBlue),
            ));

        // Circle width tracks the phase scale: wide after the inhale,
        // narrow after the exhale.
        let diameter = (8.0 * state.breath.scale()).round() as usize;
        let circle: String = "●".repeat(diameter);

        let lines = vec![
            Line::from(Span::styled(circle, Style::default().fg(Color::LightBlue))),
            Line::from(state.breath.label()),
        ];

        f.render_widget(
            Paragraph::new(Text::from(lines))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}
