use std::time::{Duration, Instant};

/// Interval between countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// UI poll interval in milliseconds
pub const DEFAULT_FRAME_MS: u64 = 250;

/// Get the UI poll duration
pub fn frame_duration() -> Duration {
    Duration::from_millis(DEFAULT_FRAME_MS)
}

/// A single repeating wake-up source.
///
/// At most one schedule is armed at a time. Arming again replaces the
/// previous schedule, and after `disarm` no further ticks are reported.
pub trait TickScheduler {
    fn arm(&mut self, period: Duration);
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;
    /// Number of wake-ups due as of `now`, consuming them
    fn due_ticks(&mut self, now: Instant) -> u32;
}

/// Wall-clock scheduler driven by the event loop
#[derive(Debug, Default)]
pub struct IntervalTicker {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self::default()
    }

    fn arm_at(&mut self, period: Duration, now: Instant) {
        self.period = period;
        self.next_due = Some(now + period);
    }
}

impl TickScheduler for IntervalTicker {
    fn arm(&mut self, period: Duration) {
        self.arm_at(period, Instant::now());
    }

    fn disarm(&mut self) {
        self.next_due = None;
    }

    fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut next_due) = self.next_due else {
            return 0;
        };
        if self.period.is_zero() {
            return 0;
        }

        let mut count = 0;
        while next_due <= now {
            count += 1;
            next_due += self.period;
        }
        self.next_due = Some(next_due);
        count
    }
}

/// Scheduler that only fires when told to. Used to simulate time in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualTicker {
    armed: bool,
    pending: u32,
    pub arm_count: usize,
}

#[cfg(test)]
impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `ticks` periods elapse. Ignored while disarmed.
    pub fn advance(&mut self, ticks: u32) {
        if self.armed {
            self.pending += ticks;
        }
    }
}

#[cfg(test)]
impl TickScheduler for ManualTicker {
    fn arm(&mut self, _period: Duration) {
        self.armed = true;
        self.pending = 0;
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.pending = 0;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }

    fn due_ticks(&mut self, _now: Instant) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_interval_ticker_counts_elapsed_periods() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new();
        ticker.arm_at(TICK_PERIOD, start);

        assert_eq!(ticker.due_ticks(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1500)), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(4200)), 3);
    }

    #[test]
    fn test_interval_ticker_disarm_stops_ticks() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new();
        ticker.arm_at(TICK_PERIOD, start);
        assert!(ticker.is_armed());

        ticker.disarm();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.due_ticks(start + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_interval_ticker_rearm_replaces_schedule() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new();
        ticker.arm_at(TICK_PERIOD, start);
        ticker.arm_at(TICK_PERIOD, start + Duration::from_millis(500));

        // Only one schedule: due at 1.5s, not also at 1.0s
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1200)), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1500)), 1);
    }

    #[test]
    fn test_manual_ticker_ignores_advance_when_disarmed() {
        let mut ticker = ManualTicker::new();
        ticker.advance(5);
        assert_eq!(ticker.due_ticks(Instant::now()), 0);

        ticker.arm(TICK_PERIOD);
        ticker.advance(3);
        ticker.disarm();
        assert_eq!(ticker.due_ticks(Instant::now()), 0);

        ticker.arm(TICK_PERIOD);
        ticker.advance(2);
        assert_eq!(ticker.due_ticks(Instant::now()), 2);
        assert_eq!(ticker.due_ticks(Instant::now()), 0);
        assert_eq!(ticker.arm_count, 2);
    }
}
