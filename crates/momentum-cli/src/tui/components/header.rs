use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::{Component, accent_color};
use crate::tui::app::AppState;

pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let accent = accent_color(state.clock.day_part());

        let lines = vec![
            Line::from(Span::styled(
                state.clock.time_line(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(state.clock.date_line()),
            Line::from(Span::styled(
                state.clock.greeting(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ];

        f.render_widget(
            Paragraph::new(Text::from(lines)).alignment(Alignment::Center),
            area,
        );
    }
}
