use momentum_core::FocusGoal;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, accent_color};
use crate::tui::app::{AppState, InputMode};

pub(crate) struct FocusGoalComponent;

impl Component for FocusGoalComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let editing = state.input_mode == InputMode::FocusEdit;
        let accent = accent_color(state.clock.day_part());

        let border_style = if editing {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                " Today's Focus ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let line = if editing {
            if state.focus_input.is_empty() {
                Line::from(vec![
                    Span::styled("▏", Style::default().fg(accent)),
                    Span::styled(
                        FocusGoal::EDIT_PLACEHOLDER,
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw(state.focus_input.clone()),
                    Span::styled("▏", Style::default().fg(accent)),
                ])
            }
        } else if state.focus_goal.is_set() {
            Line::from(state.focus_goal.text().to_string())
        } else {
            Line::from(Span::styled(
                FocusGoal::VIEW_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        };

        f.render_widget(Paragraph::new(line).block(block), area);
    }
}
