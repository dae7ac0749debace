//! Fixed-step clock
//!
//! Drivers render at whatever rate the platform gives them; the simulation
//! only ever advances in whole ticks of `Tuning::tick_ms`.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;
use crate::tuning::Tuning;

/// Longest frame gap fed into the accumulator (e.g. after a tab switch)
const MAX_FRAME: Duration = Duration::from_millis(100);

/// Accumulates frame time and hands out ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl FixedStep {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(Duration::from_millis(tuning.tick_ms))
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Feed the time since the last frame; returns how many ticks to run now.
    /// Never returns more than `MAX_SUBSTEPS`.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.min(MAX_FRAME);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    /// Fraction of a tick left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.step.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_step() {
        let mut clock = FixedStep::new(Duration::from_millis(20));
        assert_eq!(clock.advance(Duration::from_millis(20)), 1);
        assert_eq!(clock.advance(Duration::from_millis(40)), 2);
    }

    #[test]
    fn test_partial_frames_accumulate() {
        let mut clock = FixedStep::new(Duration::from_millis(20));
        assert_eq!(clock.advance(Duration::from_millis(16)), 0);
        assert!((clock.alpha() - 0.8).abs() < 0.001);
        assert_eq!(clock.advance(Duration::from_millis(16)), 1);

        // 80 ms of 60 fps frames is exactly four ticks
        let total: u32 = (0..3)
            .map(|_| clock.advance(Duration::from_millis(16)))
            .sum();
        assert_eq!(total, 3);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = FixedStep::new(Duration::from_millis(20));
        // 5 s stall counts as 100 ms
        assert_eq!(clock.advance(Duration::from_secs(5)), 5);
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_substeps_capped() {
        let mut clock = FixedStep::new(Duration::from_millis(1));
        assert_eq!(clock.advance(Duration::from_millis(100)), MAX_SUBSTEPS);
    }

    #[test]
    fn test_from_tuning() {
        let clock = FixedStep::from_tuning(&Tuning::default());
        assert_eq!(clock.step(), Duration::from_millis(20));
    }
}
