use chrono::{DateTime, Local, Timelike};

/// Coarse time-of-day bucket. Only used to pick the accent theme;
/// the greeting has its own (three-way) split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 6 {
            DayPart::Night
        } else if hour < 12 {
            DayPart::Morning
        } else if hour < 18 {
            DayPart::Afternoon
        } else {
            DayPart::Evening
        }
    }
}

/// Greeting keyed to hour-of-day. Hours before 6 still greet "Good Morning";
/// only the theme bucket distinguishes night.
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Read-only snapshot of the wall clock, refreshed once per second by the
/// owning event loop.
#[derive(Debug, Clone, Copy)]
pub struct ClockSnapshot {
    now: DateTime<Local>,
}

impl ClockSnapshot {
    pub fn capture() -> Self {
        Self { now: Local::now() }
    }

    pub fn refresh(&mut self) {
        self.now = Local::now();
    }

    pub fn hour(&self) -> u32 {
        self.now.hour()
    }

    /// Two-digit 12-hour clock, e.g. "09:41 AM".
    pub fn time_line(&self) -> String {
        self.now.format("%I:%M %p").to_string()
    }

    /// Weekday, month and unpadded day, e.g. "Saturday, August 30".
    pub fn date_line(&self) -> String {
        self.now.format("%A, %B %-d").to_string()
    }

    pub fn greeting(&self) -> &'static str {
        greeting(self.hour())
    }

    pub fn day_part(&self) -> DayPart {
        DayPart::from_hour(self.hour())
    }
}
