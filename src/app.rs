use crate::chime::Chime;
use crate::domain::{format_hours, TimerMode};
use crate::focus::{FocusTimer, PhaseCompletion};
use crate::persistence::KeyValueStore;
use crate::ticker::TickScheduler;
use std::time::Instant;

/// Step used by the +/- and [/] keys, in minutes
pub const DURATION_STEP_MINUTES: i64 = 1;

/// One-line message shown under the timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_warning: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_warning: false,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_warning: true,
        }
    }
}

/// Main application state
pub struct AppState<S: TickScheduler, K: KeyValueStore, C: Chime> {
    pub timer: FocusTimer<S, K, C>,
    pub status: Option<StatusMessage>,
    pub show_history: bool,
    pub should_quit: bool,
    pub app_start_time: Instant,
    pub completed_work_sessions: usize,
}

impl<S: TickScheduler, K: KeyValueStore, C: Chime> AppState<S, K, C> {
    pub fn new(timer: FocusTimer<S, K, C>) -> Self {
        Self {
            timer,
            status: None,
            show_history: true,
            should_quit: false,
            app_start_time: Instant::now(),
            completed_work_sessions: 0,
        }
    }

    /// Start or pause the countdown
    pub fn toggle_run_pause(&mut self) {
        self.timer.toggle();
        self.status = None;
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.status = None;
    }

    pub fn increase_work(&mut self) {
        self.adjust_duration(TimerMode::Work, DURATION_STEP_MINUTES);
    }

    pub fn decrease_work(&mut self) {
        self.adjust_duration(TimerMode::Work, -DURATION_STEP_MINUTES);
    }

    pub fn increase_break(&mut self) {
        self.adjust_duration(TimerMode::Break, DURATION_STEP_MINUTES);
    }

    pub fn decrease_break(&mut self) {
        self.adjust_duration(TimerMode::Break, -DURATION_STEP_MINUTES);
    }

    fn adjust_duration(&mut self, mode: TimerMode, delta: i64) {
        let current = i64::from(self.timer.config().duration_of(mode) / 60);
        let minutes = current + delta;
        let result = match mode {
            TimerMode::Work => self.timer.set_work_duration(minutes),
            TimerMode::Break => self.timer.set_break_duration(minutes),
        };

        self.status = Some(match result {
            Ok(()) if self.timer.is_running() && self.timer.mode() == mode => StatusMessage::info(format!(
                "{} set to {} min, applies from the next {} phase",
                mode.name(),
                minutes,
                mode.label()
            )),
            Ok(()) => StatusMessage::info(format!("{} set to {} min", mode.name(), minutes)),
            Err(e) => StatusMessage::warning(e.to_string()),
        });
    }

    pub fn toggle_show_history(&mut self) {
        self.show_history = !self.show_history;
    }

    pub fn quit(&mut self) {
        self.timer.shutdown();
        self.should_quit = true;
    }

    /// Apply due ticks and turn completed phases into status messages
    pub fn tick(&mut self, now: Instant) {
        let completions = self.timer.pump(now);
        for completion in completions {
            self.on_phase_completed(completion);
        }
    }

    fn on_phase_completed(&mut self, completion: PhaseCompletion) {
        let PhaseCompletion {
            finished,
            next,
            credited_minutes,
            persist_error,
        } = completion;

        if finished == TimerMode::Work {
            self.completed_work_sessions += 1;
        }

        self.status = Some(match (finished, persist_error) {
            (_, Some(e)) => StatusMessage::warning(format!(
                "Session logged but history was not saved: {}",
                e
            )),
            (TimerMode::Work, None) => StatusMessage::info(format!(
                "Work session done (+{} min). {} time.",
                credited_minutes.unwrap_or(0),
                next.name()
            )),
            (TimerMode::Break, None) => {
                StatusMessage::info(format!("Break over. Back to {}.", next.label()))
            }
        });
    }

    /// Today's logged work, formatted as hours
    pub fn today_total_formatted(&self) -> String {
        let today = chrono::Local::now().date_naive();
        format_hours(self.timer.history().minutes_on(today).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chime::CountingChime;
    use crate::domain::TimerConfig;
    use crate::persistence::MemoryStore;
    use crate::ticker::ManualTicker;

    type TestApp = AppState<ManualTicker, MemoryStore, CountingChime>;

    fn create_test_app(work: u32, brk: u32, store: MemoryStore) -> TestApp {
        let timer = FocusTimer::new(
            TimerConfig::from_secs(work, brk).unwrap(),
            ManualTicker::new(),
            store,
            CountingChime::default(),
        );
        AppState::new(timer)
    }

    fn elapse(app: &mut TestApp, secs: u32) {
        app.timer.scheduler_mut().advance(secs);
        app.tick(Instant::now());
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app(1500, 300, MemoryStore::new());
        assert!(app.status.is_none());
        assert!(app.show_history);
        assert!(!app.should_quit);
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_toggle_run_pause() {
        let mut app = create_test_app(1500, 300, MemoryStore::new());
        app.toggle_run_pause();
        assert!(app.timer.is_running());
        app.toggle_run_pause();
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_adjust_work_duration_while_idle() {
        let mut app = create_test_app(1500, 300, MemoryStore::new());
        app.increase_work();
        assert_eq!(app.timer.remaining_secs(), 26 * 60);
        app.decrease_work();
        app.decrease_work();
        assert_eq!(app.timer.remaining_secs(), 24 * 60);
        assert_eq!(
            app.status,
            Some(StatusMessage::info("Work set to 24 min"))
        );
    }

    #[test]
    fn test_cannot_go_below_one_minute() {
        let mut app = create_test_app(60, 60, MemoryStore::new());
        app.decrease_break();
        assert_eq!(app.timer.config().break_secs(), 60);
        let status = app.status.clone().unwrap();
        assert!(status.is_warning);
        assert!(status.text.contains("invalid break duration"));
    }

    #[test]
    fn test_adjust_while_running_is_deferred() {
        let mut app = create_test_app(600, 300, MemoryStore::new());
        app.toggle_run_pause();
        elapse(&mut app, 1);
        app.increase_work();
        assert_eq!(app.timer.remaining_secs(), 599);
        assert!(app.status.unwrap().text.contains("next work phase"));
    }

    #[test]
    fn test_phase_completion_sets_status() {
        let mut app = create_test_app(60, 30, MemoryStore::new());
        app.toggle_run_pause();
        elapse(&mut app, 60);
        assert_eq!(app.completed_work_sessions, 1);
        assert_eq!(
            app.status,
            Some(StatusMessage::info("Work session done (+1 min). Break time."))
        );

        elapse(&mut app, 30);
        assert_eq!(app.status, Some(StatusMessage::info("Break over. Back to work.")));
        assert_eq!(app.completed_work_sessions, 1);
    }

    #[test]
    fn test_save_failure_becomes_warning() {
        let mut store = MemoryStore::new();
        store.fail_writes = true;
        let mut app = create_test_app(60, 30, store);
        app.toggle_run_pause();
        elapse(&mut app, 60);

        let status = app.status.unwrap();
        assert!(status.is_warning);
        assert!(status.text.starts_with("Session logged but history was not saved"));
        assert_eq!(app.completed_work_sessions, 1);
    }

    #[test]
    fn test_quit_stops_timer() {
        let mut app = create_test_app(60, 30, MemoryStore::new());
        app.toggle_run_pause();
        app.quit();
        assert!(app.should_quit);
        assert!(!app.timer.is_running());
        assert!(!app.timer.scheduler().is_armed());
    }
}
