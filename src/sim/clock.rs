//! Frame clock
//!
//! Turns the host's display-refresh timestamps (milliseconds, as delivered by
//! `requestAnimationFrame`) into bounded delta-times in seconds.

use serde::{Deserialize, Serialize};

/// Converts a timestamp stream into clamped delta-times
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameClock {
    /// Previous timestamp in milliseconds (None before the first frame)
    last_ms: Option<f64>,
    /// Upper bound on any returned delta (seconds)
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Seconds elapsed since the previous call, clamped to `[0, max_dt]`.
    ///
    /// The first call has no reference point and returns 0. Long gaps (a
    /// backgrounded tab) are truncated to the cap; a timestamp that goes
    /// backwards yields 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        clamp_dt(dt, self.max_dt)
    }

    /// True once a first timestamp has been seen
    pub fn is_primed(&self) -> bool {
        self.last_ms.is_some()
    }

    /// Forget the previous timestamp (e.g. after the host stopped delivering frames)
    pub fn restart(&mut self) {
        self.last_ms = None;
    }
}

/// Clamp a raw delta into `[0, max_dt]`; NaN maps to 0
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() { 0.0 } else { dt.clamp(0.0, max_dt) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new(0.05);
        assert!(!clock.is_primed());
        assert_eq!(clock.advance(12_345.0), 0.0);
        assert!(clock.is_primed());
    }

    #[test]
    fn test_regular_frames() {
        let mut clock = FrameClock::new(0.05);
        clock.advance(1000.0);
        let dt = clock.advance(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_long_pause_is_capped() {
        let mut clock = FrameClock::new(0.05);
        clock.advance(0.0);
        assert_eq!(clock.advance(30_000.0), 0.05);
    }

    #[test]
    fn test_backwards_timestamp_is_zero() {
        let mut clock = FrameClock::new(0.05);
        clock.advance(500.0);
        assert_eq!(clock.advance(400.0), 0.0);
    }

    #[test]
    fn test_restart_forgets_previous() {
        let mut clock = FrameClock::new(0.05);
        clock.advance(100.0);
        clock.restart();
        assert_eq!(clock.advance(5_000.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_delta_always_within_cap(
            start in 0.0f64..1e7,
            steps in proptest::collection::vec(-100.0f64..10_000.0, 1..50),
        ) {
            let mut clock = FrameClock::new(0.05);
            let mut now = start;
            clock.advance(now);
            for step in steps {
                now += step;
                let dt = clock.advance(now);
                prop_assert!((0.0..=0.05).contains(&dt));
            }
        }
    }
}
