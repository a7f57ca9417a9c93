use super::enums::TimerMode;
use thiserror::Error;

/// Default work phase length (25 minutes)
pub const DEFAULT_WORK_SECS: u32 = 25 * 60;
/// Default break phase length (5 minutes)
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;
/// Longest phase accepted from the user (one day)
pub const MAX_PHASE_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("invalid {label} duration: {value} (must be between 1 and {max} minutes)", label = .mode.label(), max = MAX_PHASE_MINUTES)]
    InvalidConfiguration { mode: TimerMode, value: i64 },
}

/// Configured phase lengths, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    work_secs: u32,
    break_secs: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
        }
    }
}

impl TimerConfig {
    /// Build a config from raw second counts
    #[cfg(test)]
    pub fn from_secs(work_secs: u32, break_secs: u32) -> Result<Self, TimerError> {
        if work_secs == 0 {
            return Err(TimerError::InvalidConfiguration {
                mode: TimerMode::Work,
                value: 0,
            });
        }
        if break_secs == 0 {
            return Err(TimerError::InvalidConfiguration {
                mode: TimerMode::Break,
                value: 0,
            });
        }
        Ok(Self {
            work_secs,
            break_secs,
        })
    }

    /// Build a config from minute counts as entered by the user
    pub fn from_minutes(work_minutes: i64, break_minutes: i64) -> Result<Self, TimerError> {
        Ok(Self {
            work_secs: minutes_to_secs(TimerMode::Work, work_minutes)?,
            break_secs: minutes_to_secs(TimerMode::Break, break_minutes)?,
        })
    }

    pub fn work_secs(&self) -> u32 {
        self.work_secs
    }

    pub fn break_secs(&self) -> u32 {
        self.break_secs
    }

    /// Configured length of the given phase
    pub fn duration_of(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => self.work_secs,
            TimerMode::Break => self.break_secs,
        }
    }

    /// Upper bound for the remaining countdown
    pub fn ceiling(&self) -> u32 {
        self.work_secs.max(self.break_secs)
    }

    /// Minutes credited to the history for one completed work phase
    pub fn credited_minutes(&self) -> u64 {
        u64::from(self.work_secs / 60)
    }
}

fn minutes_to_secs(mode: TimerMode, minutes: i64) -> Result<u32, TimerError> {
    if !(1..=MAX_PHASE_MINUTES).contains(&minutes) {
        return Err(TimerError::InvalidConfiguration {
            mode,
            value: minutes,
        });
    }
    // Bounded above, so the cast cannot truncate
    Ok(minutes as u32 * 60)
}

/// Result of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timer was not running; nothing changed
    Ignored,
    /// Countdown moved down by one second
    Counting { remaining_secs: u32 },
    /// Countdown hit zero and the cycle moved to the next phase
    PhaseCompleted { finished: TimerMode, next: TimerMode },
}

/// Countdown state of the pomodoro cycle.
///
/// Owned by a single driver and mutated only through the transition methods
/// below. None of them perform I/O; side effects of a completed phase are left
/// to the caller, based on the returned [`Tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    mode: TimerMode,
    remaining_secs: u32,
    is_running: bool,
    config: TimerConfig,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

impl TimerState {
    /// Idle in the work phase with a full countdown
    pub fn new(config: TimerConfig) -> Self {
        Self {
            mode: TimerMode::Work,
            remaining_secs: config.work_secs,
            is_running: false,
            config,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    /// Begin counting down. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running {
            return false;
        }
        self.is_running = true;
        true
    }

    /// Stop counting down, keeping the remaining time. Returns false if idle.
    pub fn pause(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.is_running = false;
        true
    }

    /// Go idle with a full countdown for the current mode.
    /// Returns false when nothing changed.
    pub fn reset(&mut self) -> bool {
        let full = self.config.duration_of(self.mode);
        if !self.is_running && self.remaining_secs == full {
            return false;
        }
        self.is_running = false;
        self.remaining_secs = full;
        true
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> Tick {
        if !self.is_running {
            return Tick::Ignored;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return Tick::Counting {
                remaining_secs: self.remaining_secs,
            };
        }

        let finished = self.mode;
        self.mode = finished.next();
        self.remaining_secs = self.config.duration_of(self.mode);
        Tick::PhaseCompleted {
            finished,
            next: self.mode,
        }
    }

    /// Change the work phase length. See [`TimerState::set_duration`].
    pub fn set_work_duration(&mut self, minutes: i64) -> Result<(), TimerError> {
        self.set_duration(TimerMode::Work, minutes)
    }

    /// Change the break phase length. See [`TimerState::set_duration`].
    pub fn set_break_duration(&mut self, minutes: i64) -> Result<(), TimerError> {
        self.set_duration(TimerMode::Break, minutes)
    }

    /// Change the length of one phase.
    ///
    /// Invalid values leave the state untouched. While idle in the affected
    /// phase the countdown restarts from the new length; while running the
    /// new length takes effect at the next phase start or reset. Either way
    /// the countdown never exceeds the longer of the two phases.
    pub fn set_duration(&mut self, mode: TimerMode, minutes: i64) -> Result<(), TimerError> {
        let secs = minutes_to_secs(mode, minutes)?;
        match mode {
            TimerMode::Work => self.config.work_secs = secs,
            TimerMode::Break => self.config.break_secs = secs,
        }

        if !self.is_running && self.mode == mode {
            self.remaining_secs = secs;
        }
        self.remaining_secs = self.remaining_secs.min(self.config.ceiling());
        Ok(())
    }

    /// Fraction of the current phase already elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self) -> f64 {
        let total = self.config.duration_of(self.mode).max(self.remaining_secs);
        if total == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.remaining_secs) / f64::from(total)
    }
}

/// Format seconds as "MM:SS" (minutes may exceed two digits)
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
