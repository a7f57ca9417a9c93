use serde::{Deserialize, Serialize};

/// Phase of the pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerMode {
    /// Focused study time. Completing it is credited to the history.
    Work,
    /// Rest time between work phases.
    Break,
}

impl TimerMode {
    /// The phase that follows this one
    pub fn next(&self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }

    /// Lowercase name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Break => "break",
        }
    }

    /// Get the emoji symbol for this mode
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Work => "\u{1F4BC}",
            Self::Break => "\u{2615}",
        }
    }

    /// Short phrase shown under the countdown
    pub fn contextual_phrase(&self) -> &'static str {
        match self {
            Self::Work => "Stay with the task in front of you",
            Self::Break => "Breathe and reset",
        }
    }
}

/// Runtime status of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Idle,
    Running,
}

impl RunStatus {
    pub fn from_running(is_running: bool) -> Self {
        if is_running {
            Self::Running
        } else {
            Self::Idle
        }
    }

    /// Convert status to a badge tag like "RUNNING"
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
        }
    }
}
