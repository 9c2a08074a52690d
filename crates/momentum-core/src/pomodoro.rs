/// Length of one focus session in seconds (25 minutes).
pub const SESSION_SECS: u32 = 25 * 60;

/// Countdown state machine: Idle(1500) -> Running(n) -> back to Idle(1500),
/// either by natural expiry or by an explicit stop. Stop discards remaining
/// time rather than pausing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pomodoro {
    remaining: u32,
    running: bool,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self {
            remaining: SESSION_SECS,
            running: false,
        }
    }
}

impl Pomodoro {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Begins a fresh session. No-op while already running.
    pub fn start(&mut self) {
        if !self.running {
            self.remaining = SESSION_SECS;
            self.running = true;
        }
    }

    /// Abandons the session and resets to a full one.
    pub fn stop(&mut self) {
        self.running = false;
        self.remaining = SESSION_SECS;
    }

    /// One-second decrement, only meaningful while running. Returns true
    /// when the countdown expired on this tick; the state has already reset
    /// to Idle(1500) by then, so the caller should stop scheduling ticks.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stop();
            return true;
        }
        false
    }
}

/// "minutes:seconds" with two-digit seconds: 90 -> "1:30", 5 -> "0:05".
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_from_idle() {
        let mut p = Pomodoro::new();
        assert!(!p.is_running());
        p.start();
        assert!(p.is_running());
        assert_eq!(p.remaining(), SESSION_SECS);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut p = Pomodoro::new();
        p.start();
        p.tick();
        p.start();
        assert_eq!(p.remaining(), SESSION_SECS - 1);
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut p = Pomodoro::new();
        p.start();
        assert!(!p.tick());
        assert_eq!(p.remaining(), SESSION_SECS - 1);
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut p = Pomodoro::new();
        assert!(!p.tick());
        assert_eq!(p.remaining(), SESSION_SECS);
    }

    #[test]
    fn test_full_session_expires_back_to_idle() {
        let mut p = Pomodoro::new();
        p.start();
        for _ in 0..SESSION_SECS - 1 {
            assert!(!p.tick());
        }
        assert_eq!(p.remaining(), 1);
        assert!(p.tick());
        assert!(!p.is_running());
        assert_eq!(p.remaining(), SESSION_SECS);
    }

    #[test]
    fn test_stop_discards_remaining_time() {
        let mut p = Pomodoro::new();
        p.start();
        for _ in 0..100 {
            p.tick();
        }
        p.stop();
        assert!(!p.is_running());
        assert_eq!(p.remaining(), SESSION_SECS);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(90), "1:30");
        assert_eq!(format_clock(5), "0:05");
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(SESSION_SECS), "25:00");
    }
}
