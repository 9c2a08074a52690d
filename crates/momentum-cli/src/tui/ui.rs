use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components::{
    BreatheComponent, Component, FocusGoalComponent, FooterComponent, HeaderComponent,
    PomodoroComponent, QuoteComponent, StreakComponent, TasksComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Time, date, greeting
            Constraint::Length(3), // Focus goal bar
            Constraint::Min(9),    // Tasks + side column
            Constraint::Length(4), // Quote
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    HeaderComponent.render(f, main_chunks[0], state);
    FocusGoalComponent.render(f, main_chunks[1], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[2]);

    TasksComponent.render(f, columns[0], state);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Pomodoro
            Constraint::Length(4), // Streak
            Constraint::Min(4),    // Breathe
        ])
        .split(columns[1]);

    PomodoroComponent.render(f, side[0], state);
    StreakComponent.render(f, side[1], state);
    BreatheComponent.render(f, side[2], state);

    QuoteComponent.render(f, main_chunks[3], state);
    FooterComponent.render(f, main_chunks[4], state);
}
