use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::Component;
use crate::tui::app::{AppState, InputMode};

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let hints = match state.input_mode {
            InputMode::Normal => {
                "a add · j/k select · space toggle · x delete · f focus · s timer · q quit"
            }
            InputMode::TaskEntry => "enter add task · esc close",
            InputMode::FocusEdit => "enter/esc save focus",
        };

        f.render_widget(
            Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
