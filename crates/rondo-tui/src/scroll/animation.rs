//! Scroll animation controller for the circular task list.
//!
//! Two states: Idle (no `ActiveAnimation`) and Running. Navigation arms an
//! animation toward the shortest-path-adjusted target; taps arm one toward
//! a literal, possibly multi-revolution slot. `update_at` advances the
//! interpolation and, when the animation settles, normalizes the position
//! into `[0, N)` and reports the committed discrete index.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::ring;
use super::timing::{is_complete, lerp, progress};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting continuous position
    from: f64,
    /// Target continuous position (not wrapped until completion)
    to: f64,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Circular scroll animator
///
/// Owns the continuous scroll position. Arm it with `animate_to_index`
/// (navigation, shortest-path wrap) or `animate_to_slot` (tap, literal
/// target), then call `update_at` every frame; the return value carries
/// the discrete index once the transition has settled.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Current continuous position
    position: f64,
    /// Configuration
    config: ScrollConfig,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    /// Create a new scroll animator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            position: 0.0,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get current configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently running
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the current continuous position
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Get the target position (final position after animation)
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.position)
    }

    /// The slot nearest the current position, for highlight and cursor
    /// emphasis while a transition is still in flight.
    pub fn focused_slot(&self) -> i64 {
        (self.position + 0.5).floor() as i64
    }

    /// Jump to a discrete index without animating. Used by add and delete,
    /// which snap instead of blending.
    pub fn snap_to(&mut self, index: usize) {
        self.animation = None;
        self.position = index as f64;
    }

    /// Reset to the empty-list state
    pub fn reset(&mut self) {
        self.animation = None;
        self.position = 0.0;
    }

    /// Animate toward a discrete index along the shorter rotational
    /// direction. Jumps immediately when smooth scrolling is disabled.
    pub fn animate_to_index(&mut self, index: usize, len: usize, now: Instant) {
        if len == 0 {
            self.reset();
            return;
        }
        let target = ring::shortest_path_target(self.position, index, len);
        self.start(target, now);
    }

    /// Animate toward a literal continuous slot, which may lie several
    /// revolutions away. The position is not pre-normalized: a multi-lap
    /// tap spins through every intermediate revolution and wraps only once
    /// the animation completes.
    pub fn animate_to_slot(&mut self, slot: f64, now: Instant) {
        self.start(slot, now);
    }

    fn start(&mut self, target: f64, now: Instant) {
        if !self.config.is_smooth() {
            self.animation = None;
            self.position = target;
            return;
        }
        if (target - self.position).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }
        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.position,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation to `now`.
    ///
    /// Returns `Some(index)` exactly when a transition settles on this
    /// update: the position has been normalized into `[0, N)` and `index`
    /// is the discrete item to commit as selected. An empty list abandons
    /// any animation and resets the position to 0.
    pub fn update_at(&mut self, now: Instant, len: usize) -> Option<usize> {
        if len == 0 {
            self.reset();
            return None;
        }

        let anim = self.animation.clone()?;
        if is_complete(anim.start, now, anim.duration) {
            self.position = ring::normalize(anim.to, len);
            self.animation = None;
            Some(ring::wrap_index(self.position, len))
        } else {
            let t = progress(anim.start, now, anim.duration);
            let eased = anim.easing.apply(t);
            self.position = lerp(anim.from, anim.to, eased);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(duration_ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            animation_duration_ms: duration_ms,
            ..Default::default()
        })
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn settles_on_target_index() {
        let mut anim = animator(350);
        let t0 = Instant::now();
        anim.animate_to_index(1, 3, t0);
        assert!(anim.is_animating());

        assert_eq!(anim.update_at(t0 + ms(100), 3), None);
        assert_eq!(anim.update_at(t0 + ms(350), 3), Some(1));
        assert!(!anim.is_animating());
        assert!((anim.position() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cubic_ease_midpoint_position() {
        let mut anim = animator(350);
        let t0 = Instant::now();
        anim.animate_to_index(1, 3, t0);

        anim.update_at(t0 + ms(175), 3);
        // eased(0.5) = 1 - 0.5³ = 0.875
        assert!((anim.position() - 0.875).abs() < 1e-9);
    }

    #[test]
    fn navigation_takes_shortest_path() {
        let mut anim = animator(350);
        let t0 = Instant::now();
        // 0 -> 4 on a 5-ring rotates backward through -1
        anim.animate_to_index(4, 5, t0);
        assert!((anim.target() - (-1.0)).abs() < 1e-9);

        // ...and still commits index 4 after normalization
        assert_eq!(anim.update_at(t0 + ms(350), 5), Some(4));
        assert!((anim.position() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn adjacent_moves_never_exceed_half_ring() {
        for n in 1..=7usize {
            for i in 0..n {
                let mut anim = animator(350);
                let t0 = Instant::now();
                anim.snap_to(i);
                anim.animate_to_index((i + 1) % n, n, t0);
                let travel = (anim.target() - i as f64).abs();
                assert!(travel <= n as f64 / 2.0, "n={n} i={i} travel={travel}");
            }
        }
    }

    #[test]
    fn multi_lap_tap_travels_literally() {
        let mut anim = animator(350);
        let t0 = Instant::now();
        // Tap offset of 2N+1 on a 3-ring: 7 continuous units
        anim.animate_to_slot(7.0, t0);
        assert!((anim.target() - 7.0).abs() < 1e-9);

        // Mid-flight the position passes through intermediate laps
        anim.update_at(t0 + ms(175), 3);
        assert!(anim.position() > 3.0 && anim.position() < 7.0);

        // Lands on the same item a +1 tap would
        assert_eq!(anim.update_at(t0 + ms(350), 3), Some(1));
        assert!((anim.position() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_list_abandons_animation() {
        let mut anim = animator(350);
        let t0 = Instant::now();
        anim.animate_to_index(2, 3, t0);
        anim.update_at(t0 + ms(50), 3);

        assert_eq!(anim.update_at(t0 + ms(100), 0), None);
        assert!(!anim.is_animating());
        assert!((anim.position()).abs() < 1e-9);
    }

    #[test]
    fn disabled_smooth_scrolling_snaps() {
        let mut anim = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        anim.animate_to_index(2, 3, Instant::now());
        assert!(!anim.is_animating());
        assert!((anim.position() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn snap_cancels_running_animation() {
        let mut anim = animator(350);
        let t0 = Instant::now();
        anim.animate_to_index(1, 3, t0);
        anim.snap_to(2);
        assert!(!anim.is_animating());
        assert!((anim.position() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn interrupted_animation_restarts_from_current_position() {
        let mut anim = animator(350);
        let t0 = Instant::now();
        anim.animate_to_index(1, 5, t0);
        anim.update_at(t0 + ms(175), 5);
        let mid = anim.position();

        anim.animate_to_index(2, 5, t0 + ms(175));
        anim.update_at(t0 + ms(176), 5);
        // No backward jump at the restart
        assert!((anim.position() - mid).abs() < 0.1);
    }
}
