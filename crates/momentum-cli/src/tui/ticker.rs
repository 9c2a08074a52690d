use std::time::{Duration, Instant};

/// A cancellable recurring deadline. Each timing process in the dashboard
/// (clock, breathing cycle, pomodoro countdown) owns one; dropping the
/// event loop drops the tickers with it, so no tick outlives the view.
#[derive(Debug)]
pub(crate) struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn started(period: Duration) -> Self {
        let mut ticker = Self::new(period);
        ticker.start();
        ticker
    }

    /// Schedules the first firing one period out. No-op while already
    /// scheduled, so rapid start/stop cycles cannot double-schedule.
    pub fn start(&mut self) {
        if self.next.is_none() {
            self.next = Some(Instant::now() + self.period);
        }
    }

    /// Cancels any pending firing.
    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Consumes a due deadline and schedules the next one a full period
    /// after the old deadline, keeping a steady cadence.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if now >= deadline => {
                self.next = Some(deadline + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_schedules_once() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        assert!(!ticker.is_running());
        ticker.start();
        let first = ticker.deadline();
        ticker.start();
        assert_eq!(ticker.deadline(), first);
    }

    #[test]
    fn test_stop_cancels_pending_firing() {
        let mut ticker = Ticker::started(Duration::from_secs(1));
        ticker.stop();
        assert!(!ticker.is_running());
        assert!(!ticker.fire_if_due(Instant::now() + Duration::from_secs(5)));
    }

    #[test]
    fn test_fire_before_deadline_is_noop() {
        let mut ticker = Ticker::started(Duration::from_secs(60));
        assert!(!ticker.fire_if_due(Instant::now()));
        assert!(ticker.is_running());
    }

    #[test]
    fn test_fire_reschedules_one_period_later() {
        let mut ticker = Ticker::started(Duration::from_secs(1));
        let deadline = ticker.deadline().unwrap();
        assert!(ticker.fire_if_due(deadline));
        assert_eq!(ticker.deadline(), Some(deadline + Duration::from_secs(1)));
    }

    #[test]
    fn test_restart_after_stop_schedules_fresh_deadline() {
        let mut ticker = Ticker::started(Duration::from_millis(10));
        let deadline = ticker.deadline().unwrap();
        assert!(ticker.fire_if_due(deadline));
        ticker.stop();
        ticker.start();
        assert!(ticker.is_running());
        assert!(ticker.deadline().unwrap() >= deadline);
    }
}
