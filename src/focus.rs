use crate::chime::Chime;
use crate::domain::{SessionHistory, Tick, TimerConfig, TimerError, TimerMode, TimerState};
use crate::persistence::{load_history, save_history, KeyValueStore, StoreError};
use crate::ticker::{TickScheduler, TICK_PERIOD};
use chrono::NaiveDate;
use std::time::Instant;

/// Read-only view of the countdown for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub remaining_secs: u32,
    pub is_running: bool,
}

/// A phase that ran to zero during a tick
#[derive(Debug)]
pub struct PhaseCompletion {
    pub finished: TimerMode,
    pub next: TimerMode,
    /// Minutes added to today's history (work phases only)
    pub credited_minutes: Option<u64>,
    /// Set when the history could not be written; the in-memory history is
    /// still updated
    pub persist_error: Option<StoreError>,
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Pomodoro timer with its collaborators.
///
/// Owns the countdown, the session history, and the single wake-up
/// schedule. Starting arms exactly one schedule; pausing and resetting
/// disarm it before returning.
pub struct FocusTimer<S: TickScheduler, K: KeyValueStore, C: Chime> {
    state: TimerState,
    history: SessionHistory,
    scheduler: S,
    store: K,
    chime: C,
    today: fn() -> NaiveDate,
}

impl<S: TickScheduler, K: KeyValueStore, C: Chime> FocusTimer<S, K, C> {
    /// Create an idle work-phase timer, loading history from the store
    pub fn new(config: TimerConfig, scheduler: S, store: K, chime: C) -> Self {
        let history = load_history(&store);
        tracing::debug!(days = history.len(), "loaded session history");

        Self {
            state: TimerState::new(config),
            history,
            scheduler,
            store,
            chime,
            today: local_today,
        }
    }

    /// Override the date source used when crediting history
    #[cfg(test)]
    pub fn with_date_source(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn mode(&self) -> TimerMode {
        self.state.mode()
    }

    #[cfg(test)]
    pub fn remaining_secs(&self) -> u32 {
        self.state.remaining_secs()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn config(&self) -> TimerConfig {
        self.state.config()
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.state.mode(),
            remaining_secs: self.state.remaining_secs(),
            is_running: self.state.is_running(),
        }
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[cfg(test)]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[cfg(test)]
    pub fn store(&self) -> &K {
        &self.store
    }

    #[cfg(test)]
    pub fn chime(&self) -> &C {
        &self.chime
    }

    pub fn start(&mut self) -> bool {
        if !self.state.start() {
            return false;
        }
        self.scheduler.arm(TICK_PERIOD);
        tracing::debug!(mode = ?self.state.mode(), remaining = self.state.remaining_secs(), "timer started");
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.state.pause() {
            return false;
        }
        self.scheduler.disarm();
        tracing::debug!(mode = ?self.state.mode(), remaining = self.state.remaining_secs(), "timer paused");
        true
    }

    /// Start when idle, pause when running
    pub fn toggle(&mut self) {
        if self.state.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) -> bool {
        self.scheduler.disarm();
        let changed = self.state.reset();
        if changed {
            tracing::debug!(mode = ?self.state.mode(), "timer reset");
        }
        changed
    }

    pub fn set_work_duration(&mut self, minutes: i64) -> Result<(), TimerError> {
        self.state.set_work_duration(minutes)?;
        tracing::debug!(minutes, running = self.state.is_running(), "work duration changed");
        Ok(())
    }

    pub fn set_break_duration(&mut self, minutes: i64) -> Result<(), TimerError> {
        self.state.set_break_duration(minutes)?;
        tracing::debug!(minutes, running = self.state.is_running(), "break duration changed");
        Ok(())
    }

    /// Apply one second of countdown.
    ///
    /// When a work phase runs out, today's history is credited and written
    /// back and the chime rings. The cycle keeps running in the next phase.
    pub fn tick(&mut self) -> Option<PhaseCompletion> {
        let (finished, next) = match self.state.tick() {
            Tick::PhaseCompleted { finished, next } => (finished, next),
            Tick::Ignored | Tick::Counting { .. } => return None,
        };

        let mut completion = PhaseCompletion {
            finished,
            next,
            credited_minutes: None,
            persist_error: None,
        };

        if finished == TimerMode::Work {
            let minutes = self.state.config().credited_minutes();
            let today = (self.today)();
            let total = self.history.record(today, minutes);
            completion.credited_minutes = Some(minutes);
            tracing::info!(date = %today, minutes, total, "work session completed");

            if let Err(e) = save_history(&mut self.store, &self.history) {
                tracing::warn!(error = %e, "failed to save session history");
                completion.persist_error = Some(e);
            }
            self.chime.ring();
        } else {
            tracing::info!("break finished");
        }

        Some(completion)
    }

    /// Apply every wake-up the scheduler has due as of `now`
    pub fn pump(&mut self, now: Instant) -> Vec<PhaseCompletion> {
        if !self.scheduler.is_armed() {
            return Vec::new();
        }
        let due = self.scheduler.due_ticks(now);
        (0..due).filter_map(|_| self.tick()).collect()
    }

    /// Stop and cancel any pending wake-up before the timer goes away
    pub fn shutdown(&mut self) {
        self.pause();
        self.scheduler.disarm();
    }
}
