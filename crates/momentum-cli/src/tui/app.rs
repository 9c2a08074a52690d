use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::KeyCode;
use momentum_core::{
    BreathPhase, ClockSnapshot, FocusGoal, Pomodoro, Quote, Streak, TodoList,
    breath::PHASE_SECS, pick_quote,
};

use super::ticker::Ticker;

/// Which piece of the view owns keystrokes right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    TaskEntry,
    FocusEdit,
}

pub(crate) struct AppState {
    pub clock: ClockSnapshot,
    pub todos: TodoList,
    pub task_input: String,
    pub selected: usize,
    pub focus_goal: FocusGoal,
    pub focus_input: String,
    pub input_mode: InputMode,
    pub pomodoro: Pomodoro,
    pub breath: BreathPhase,
    pub quote: Quote,
    pub streak: Streak,
    pub should_quit: bool,

    clock_ticker: Ticker,
    breath_ticker: Ticker,
    pomodoro_ticker: Ticker,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            clock: ClockSnapshot::capture(),
            todos: TodoList::new(),
            task_input: String::new(),
            selected: 0,
            focus_goal: FocusGoal::new(),
            focus_input: String::new(),
            input_mode: InputMode::Normal,
            pomodoro: Pomodoro::new(),
            breath: BreathPhase::default(),
            quote: pick_quote(),
            streak: Streak::default(),
            should_quit: false,
            // Clock and breathing cycle run for the lifetime of the view;
            // the pomodoro ticker only runs while the countdown does.
            clock_ticker: Ticker::started(Duration::from_secs(1)),
            breath_ticker: Ticker::started(Duration::from_secs(PHASE_SECS)),
            pomodoro_ticker: Ticker::new(Duration::from_secs(1)),
        }
    }

    /// How long the event loop may block before some ticker is due.
    pub fn next_deadline_timeout(&self) -> Duration {
        let now = Instant::now();
        [&self.clock_ticker, &self.breath_ticker, &self.pomodoro_ticker]
            .iter()
            .filter_map(|t| t.deadline())
            .map(|deadline| deadline.saturating_duration_since(now))
            .min()
            .unwrap_or(Duration::from_millis(250))
    }

    pub fn fire_due_tickers(&mut self) {
        let now = Instant::now();
        if self.clock_ticker.fire_if_due(now) {
            self.clock.refresh();
        }
        if self.breath_ticker.fire_if_due(now) {
            self.breath.advance();
        }
        if self.pomodoro_ticker.fire_if_due(now) && self.pomodoro.tick() {
            // Countdown expired and reset itself; stop scheduling until the
            // next explicit start.
            self.pomodoro_ticker.stop();
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(code),
            InputMode::TaskEntry => self.handle_task_entry_key(code),
            InputMode::FocusEdit => self.handle_focus_edit_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => {
                self.input_mode = InputMode::TaskEntry;
            }
            KeyCode::Char('f') => {
                self.focus_input = self.focus_goal.edit_seed();
                self.input_mode = InputMode::FocusEdit;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.todos.toggle(id);
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.todos.remove(id);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('s') => {
                self.toggle_pomodoro();
            }
            _ => {}
        }
    }

    fn handle_task_entry_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Esc => {
                self.task_input.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.task_input.pop();
            }
            KeyCode::Char(c) => {
                self.task_input.push(c);
            }
            _ => {}
        }
    }

    fn submit_task(&mut self) {
        let now_ms = Utc::now().timestamp_millis().max(0) as u64;
        if self.todos.add(&self.task_input, now_ms).is_some() {
            self.task_input.clear();
            self.input_mode = InputMode::Normal;
        }
        // Whitespace-only input degrades silently to a no-op; the field
        // keeps its contents and focus.
    }

    fn handle_focus_edit_key(&mut self, code: KeyCode) {
        match code {
            // Leaving edit mode always commits the buffer; there is no
            // cancel path for the focus goal.
            KeyCode::Enter | KeyCode::Esc => {
                self.focus_goal.commit(std::mem::take(&mut self.focus_input));
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.focus_input.pop();
            }
            KeyCode::Char(c) => {
                self.focus_input.push(c);
            }
            _ => {}
        }
    }

    fn toggle_pomodoro(&mut self) {
        if self.pomodoro.is_running() {
            self.pomodoro.stop();
            self.pomodoro_ticker.stop();
        } else {
            self.pomodoro.start();
            self.pomodoro_ticker.start();
        }
    }

    #[allow(dead_code)]
    pub fn pomodoro_ticker_running(&self) -> bool {
        self.pomodoro_ticker.is_running()
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.todos.items().get(self.selected).map(|t| t.id)
    }

    pub fn select_next(&mut self) {
        if !self.todos.is_empty() {
            self.selected = (self.selected + 1).min(self.todos.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.todos.len() {
            self.selected = self.todos.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_task_through_entry_mode() {
        let mut state = AppState::new();
        state.handle_key(KeyCode::Char('a'));
        assert_eq!(state.input_mode, InputMode::TaskEntry);

        type_text(&mut state, "Buy milk");
        state.handle_key(KeyCode::Enter);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos.items()[0].text, "Buy milk");
        assert!(!state.todos.items()[0].done);
        assert!(state.task_input.is_empty());
    }

    #[test]
    fn test_whitespace_task_submit_is_noop_and_keeps_field() {
        let mut state = AppState::new();
        state.handle_key(KeyCode::Char('a'));
        type_text(&mut state, "   ");
        state.handle_key(KeyCode::Enter);

        assert_eq!(state.input_mode, InputMode::TaskEntry);
        assert_eq!(state.task_input, "   ");
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_task_entry_escape_clears_field() {
        let mut state = AppState::new();
        state.handle_key(KeyCode::Char('a'));
        type_text(&mut state, "half a tho");
        state.handle_key(KeyCode::Esc);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.task_input.is_empty());
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_toggle_and_delete_selected_task() {
        let mut state = AppState::new();
        state.todos.add("a", 1_000);
        state.todos.add("b", 2_000);

        state.handle_key(KeyCode::Char('j'));
        state.handle_key(KeyCode::Char(' '));
        assert!(state.todos.items()[1].done);

        state.handle_key(KeyCode::Char('x'));
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos.items()[0].text, "a");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = AppState::new();
        state.handle_key(KeyCode::Char('j'));
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_id(), None);

        state.todos.add("only", 1_000);
        state.handle_key(KeyCode::Char('j'));
        state.handle_key(KeyCode::Char('j'));
        assert_eq!(state.selected, 0);
        state.handle_key(KeyCode::Char('k'));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_focus_edit_commits_on_enter_and_escape() {
        let mut state = AppState::new();
        state.handle_key(KeyCode::Char('f'));
        assert_eq!(state.input_mode, InputMode::FocusEdit);
        type_text(&mut state, "Ship it");
        state.handle_key(KeyCode::Enter);
        assert_eq!(state.focus_goal.text(), "Ship it");

        // Re-entering seeds the buffer; Esc commits the partial edit too.
        state.handle_key(KeyCode::Char('f'));
        assert_eq!(state.focus_input, "Ship it");
        state.handle_key(KeyCode::Backspace);
        state.handle_key(KeyCode::Esc);
        assert_eq!(state.focus_goal.text(), "Ship i");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_pomodoro_key_toggles_countdown_and_ticker() {
        let mut state = AppState::new();
        assert!(!state.pomodoro_ticker_running());

        state.handle_key(KeyCode::Char('s'));
        assert!(state.pomodoro.is_running());
        assert!(state.pomodoro_ticker_running());

        state.handle_key(KeyCode::Char('s'));
        assert!(!state.pomodoro.is_running());
        assert!(!state.pomodoro_ticker_running());
        assert_eq!(state.pomodoro.remaining(), momentum_core::pomodoro::SESSION_SECS);
    }

    #[test]
    fn test_quote_is_stable_across_updates() {
        let mut state = AppState::new();
        let chosen = state.quote;
        state.handle_key(KeyCode::Char('a'));
        type_text(&mut state, "task");
        state.handle_key(KeyCode::Enter);
        state.fire_due_tickers();
        assert_eq!(state.quote, chosen);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new();
        state.handle_key(KeyCode::Char('q'));
        assert!(state.should_quit);
    }
}
