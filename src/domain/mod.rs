pub mod enums;
pub mod history;
pub mod timer;

pub use enums::{RunStatus, TimerMode};
pub use history::{format_hours, SessionHistory};
pub use timer::{format_countdown, Tick, TimerConfig, TimerError, TimerState};
