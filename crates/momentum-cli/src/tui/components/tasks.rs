use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, accent_color};
use crate::tui::app::{AppState, InputMode};

pub(crate) struct TasksComponent;

impl Component for TasksComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let accent = accent_color(state.clock.day_part());
        let entering = state.input_mode == InputMode::TaskEntry;

        let title = format!(
            " Tasks {}/{} • {}% ",
            state.todos.done_count(),
            state.todos.len(),
            state.todos.completion_pct(),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let mut lines: Vec<Line> = Vec::new();

        if entering {
            let input = if state.task_input.is_empty() {
                Line::from(vec![
                    Span::styled("> ▏", Style::default().fg(accent)),
                    Span::styled("Add a new task...", Style::default().fg(Color::DarkGray)),
                ])
            } else {
                Line::from(vec![
                    Span::styled("> ", Style::default().fg(accent)),
                    Span::raw(state.task_input.clone()),
                    Span::styled("▏", Style::default().fg(accent)),
                ])
            };
            lines.push(input);
            lines.push(Line::from(""));
        }

        if state.todos.is_empty() {
            lines.push(Line::from(Span::styled(
                "No tasks yet. Add one to get started!",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for (index, todo) in state.todos.items().iter().enumerate() {
                let selected = index == state.selected && !entering;
                let marker = if todo.done { "✔" } else { "○" };
                let marker_style = if todo.done {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let mut text_style = Style::default();
                if todo.done {
                    text_style = text_style
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT);
                }
                if selected {
                    text_style = text_style.add_modifier(Modifier::REVERSED);
                }

                lines.push(Line::from(vec![
                    Span::raw(if selected { "▸ " } else { "  " }),
                    Span::styled(marker, marker_style),
                    Span::raw(" "),
                    Span::styled(todo.text.clone(), text_style),
                ]));
            }
        }

        f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
    }
}
