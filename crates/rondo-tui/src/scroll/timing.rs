//! Time calculation helpers for scroll animations.
//!
//! Every function takes the current instant as an argument instead of
//! reading the clock, so the animation step stays a pure function that
//! tests can drive with synthetic timestamps.

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0] at `now` for an animation started at
/// `start` with the given duration. A zero duration is already complete.
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Check if the animation has run to completion at `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values, `t` in [0.0, 1.0]
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert!((lerp(0.0, 100.0, 0.0)).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        // Works on descending ranges too
        assert!((lerp(2.0, -1.0, 0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn progress_clamps() {
        let start = Instant::now();
        let duration = Duration::from_millis(100);
        assert!((progress(start, start, duration)).abs() < 0.001);
        assert!(
            (progress(start, start + Duration::from_millis(50), duration) - 0.5).abs() < 0.001
        );
        assert!(
            (progress(start, start + Duration::from_millis(500), duration) - 1.0).abs() < 0.001
        );
    }

    #[test]
    fn zero_duration_is_complete() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
        assert!(is_complete(start, start, Duration::ZERO));
    }
}
