//! Circular position arithmetic.
//!
//! A continuous position on the ring is an unbounded `f64`; the item it
//! points at is its rounded value wrapped into `[0, N)`.

/// Wrap a continuous position to its discrete item index
#[inline]
pub fn wrap_index(position: f64, len: usize) -> usize {
    debug_assert!(len > 0);
    (position.round() as i64).rem_euclid(len as i64) as usize
}

/// Normalize a continuous position into `[0, N)`
#[inline]
pub fn normalize(position: f64, len: usize) -> f64 {
    debug_assert!(len > 0);
    position.rem_euclid(len as f64)
}

/// Adjust a discrete target so the animated path takes the shorter
/// rotational direction from `position`.
///
/// `diff = target - position`; the target is shifted by one revolution
/// when the difference exceeds half the ring in either direction.
#[inline]
pub fn shortest_path_target(position: f64, target: usize, len: usize) -> f64 {
    debug_assert!(len > 0);
    let n = len as f64;
    let mut target = target as f64;
    let diff = target - position;
    if diff > n / 2.0 {
        target -= n;
    } else if diff < -n / 2.0 {
        target += n;
    }
    target
}

/// Convert a vertical offset from the carousel center (in terminal rows)
/// to an integer slot offset.
///
/// Rounds to the nearest slot with ties away from the center so there is
/// no dead zone at a slot boundary; truncating integer division gives
/// exactly that for both signs.
#[inline]
pub fn slot_offset(dy: i32, spacing: i32) -> i32 {
    debug_assert!(spacing > 0);
    if dy >= 0 {
        (dy + spacing / 2) / spacing
    } else {
        (dy - spacing / 2) / spacing
    }
}
