pub mod breath;
pub mod clock;
pub mod focus;
pub mod pomodoro;
pub mod quote;
pub mod streak;
pub mod todo;

pub use breath::BreathPhase;
pub use clock::{ClockSnapshot, DayPart, greeting};
pub use focus::FocusGoal;
pub use pomodoro::{Pomodoro, format_clock};
pub use quote::{QUOTES, Quote, pick_quote};
pub use streak::Streak;
pub use todo::{Todo, TodoList};
