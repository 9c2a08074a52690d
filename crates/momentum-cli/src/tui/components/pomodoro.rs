use momentum_core::format_clock;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct PomodoroComponent;

impl Component for PomodoroComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let running = state.pomodoro.is_running();

        let (clock_color, border_color) = if running {
            (Color::LightRed, Color::Red)
        } else {
            (Color::White, Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                " Focus Timer ",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ));

        let action = if running {
            "[s] Stop Pomodoro"
        } else {
            "[s] Start Pomodoro"
        };

        let lines = vec![
            Line::from(Span::styled(
                format_clock(state.pomodoro.remaining()),
                Style::default()
                    .fg(clock_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(action, Style::default().fg(Color::Gray))),
        ];

        f.render_widget(
            Paragraph::new(Text::from(lines))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}
