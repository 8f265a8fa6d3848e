//! Idle timeout of the RGB matrix.
//!
//! Minutes without a key press are counted from the last reset. Once the count reaches the
//! threshold the matrix is turned off until the next key press turns it back on.

use embassy_time::{Duration, Instant};

use crate::config::IdleConfig;

/// Result of a single [`IdleTimeout::tick`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdleState {
    /// The threshold is 0, the timeout never fires
    Inert,
    /// Still below the threshold
    Counting,
    /// The threshold has been reached, lighting should be off
    TimedOut,
}

#[derive(Clone, Copy, Debug)]
pub struct IdleTimeout {
    /// Start of the current interval
    timer: Instant,
    /// Elapsed intervals since the last reset
    counter: u16,
    /// In intervals, 0 disables the timeout
    threshold: u16,
    max_threshold: u16,
    tick: Duration,
    timed_out: bool,
}

impl IdleTimeout {
    pub fn new(config: IdleConfig, now: Instant) -> Self {
        Self {
            timer: now,
            counter: 0,
            threshold: config.default_threshold.min(config.max_threshold),
            max_threshold: config.max_threshold,
            tick: config.tick,
            timed_out: false,
        }
    }

    /// Restart counting from `now`
    pub fn reset(&mut self, now: Instant) {
        self.timer = now;
        self.counter = 0;
        self.timed_out = false;
    }

    /// Advance the counter if a full interval has passed and report the state.
    pub fn tick(&mut self, now: Instant) -> IdleState {
        if self.threshold == 0 {
            return IdleState::Inert;
        }

        if now.saturating_duration_since(self.timer) >= self.tick {
            self.counter = self.counter.saturating_add(1);
            self.timer = now;
            trace!("Idle for {} intervals", self.counter);
        }

        if self.counter >= self.threshold {
            if !self.timed_out {
                info!("Idle timeout reached after {} minutes", self.counter);
                self.timed_out = true;
            }
            IdleState::TimedOut
        } else {
            IdleState::Counting
        }
    }

    /// Raise or lower the threshold by one, clamped to `[0, max_threshold]`.
    ///
    /// The new value is used by the next `tick`; the elapsed count is kept.
    pub fn adjust_threshold(&mut self, increase: bool) {
        if increase && self.threshold < self.max_threshold {
            self.threshold += 1;
        }
        if !increase && self.threshold > 0 {
            self.threshold -= 1;
        }
        debug!("Idle timeout threshold: {}", self.threshold);
    }

    /// Set the threshold directly, values above the maximum are clamped
    pub fn set_threshold(&mut self, threshold: u16) {
        self.threshold = threshold.min(self.max_threshold);
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn counter(&self) -> u16 {
        self.counter
    }

    pub fn is_timed_out(&self) -> bool {
        self.timed_out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const MINUTE: u64 = 60_000;

    fn idle() -> IdleTimeout {
        IdleTimeout::new(IdleConfig::default(), Instant::from_millis(0))
    }

    #[test]
    fn test_counts_full_minutes_only() {
        let mut idle = idle();
        assert_eq!(idle.tick(Instant::from_millis(MINUTE - 1)), IdleState::Counting);
        assert_eq!(idle.counter(), 0);
        assert_eq!(idle.tick(Instant::from_millis(MINUTE)), IdleState::Counting);
        assert_eq!(idle.counter(), 1);
        // The next minute starts at the tick, not at the previous boundary
        assert_eq!(idle.tick(Instant::from_millis(2 * MINUTE - 1)), IdleState::Counting);
        assert_eq!(idle.counter(), 1);
    }

    #[test]
    fn test_times_out_at_default_threshold() {
        let mut idle = idle();
        for minute in 1..5 {
            assert_eq!(idle.tick(Instant::from_millis(minute * MINUTE)), IdleState::Counting);
        }
        assert_eq!(idle.tick(Instant::from_millis(5 * MINUTE)), IdleState::TimedOut);
        assert!(idle.is_timed_out());
        // Stays timed out on further scans
        assert_eq!(idle.tick(Instant::from_millis(5 * MINUTE + 10)), IdleState::TimedOut);
    }

    #[test]
    fn test_zero_threshold_is_inert() {
        let mut idle = idle();
        idle.set_threshold(0);
        for minute in 1..=300 {
            assert_eq!(idle.tick(Instant::from_millis(minute * MINUTE)), IdleState::Inert);
        }
        assert_eq!(idle.counter(), 0);
    }

    #[test]
    fn test_reset() {
        let mut idle = idle();
        idle.set_threshold(1);
        assert_eq!(idle.tick(Instant::from_millis(MINUTE)), IdleState::TimedOut);
        idle.reset(Instant::from_millis(MINUTE + 5));
        assert_eq!(idle.counter(), 0);
        assert!(!idle.is_timed_out());
        assert_eq!(idle.tick(Instant::from_millis(2 * MINUTE)), IdleState::Counting);
        assert_eq!(idle.tick(Instant::from_millis(2 * MINUTE + 5)), IdleState::TimedOut);
    }

    #[test]
    fn test_adjust_threshold_clamped() {
        let mut idle = idle();
        idle.set_threshold(139);
        idle.adjust_threshold(true);
        idle.adjust_threshold(true);
        assert_eq!(idle.threshold(), 140);

        idle.set_threshold(1000);
        assert_eq!(idle.threshold(), 140);

        idle.set_threshold(1);
        idle.adjust_threshold(false);
        idle.adjust_threshold(false);
        assert_eq!(idle.threshold(), 0);
    }

    #[test]
    fn test_lowering_threshold_applies_on_next_tick() {
        let mut idle = idle();
        for minute in 1..=3 {
            idle.tick(Instant::from_millis(minute * MINUTE));
        }
        assert_eq!(idle.counter(), 3);
        idle.adjust_threshold(false);
        idle.adjust_threshold(false);
        // No new interval has passed, the existing count is compared against the new threshold
        assert_eq!(idle.tick(Instant::from_millis(3 * MINUTE + 1)), IdleState::TimedOut);
    }
}
