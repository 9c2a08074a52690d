use momentum_core::DayPart;
use ratatui::{Frame, layout::Rect, style::Color};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod breathe;
pub(crate) mod focus_goal;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod pomodoro;
pub(crate) mod quote;
pub(crate) mod streak;
pub(crate) mod tasks;

pub(crate) use breathe::BreatheComponent;
pub(crate) use focus_goal::FocusGoalComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use pomodoro::PomodoroComponent;
pub(crate) use quote::QuoteComponent;
pub(crate) use streak::StreakComponent;
pub(crate) use tasks::TasksComponent;

/// Accent color keyed to the time of day.
pub(crate) fn accent_color(part: DayPart) -> Color {
    match part {
        DayPart::Night => Color::Magenta,
        DayPart::Morning => Color::LightYellow,
        DayPart::Afternoon => Color::Cyan,
        DayPart::Evening => Color::LightRed,
    }
}
