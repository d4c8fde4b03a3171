//! Smooth circular scrolling for the task carousel.
//!
//! The list is conceptually infinite: the continuous scroll position is an
//! unbounded `f64`, and the item under a position is its rounded value
//! wrapped into `[0, N)`. Navigation animates along the shorter rotational
//! direction; taps may target positions several revolutions away and are
//! interpolated literally, normalizing only once the animation settles.
//!
//! - `easing` - pure easing curves
//! - `timing` - progress/interpolation helpers, time passed in explicitly
//! - `ring` - circular position arithmetic
//! - `animation` - the animator state machine combining the above
//! - `config` - configuration re-exports from rondo-core

pub mod animation;
pub mod config;
pub mod easing;
pub mod ring;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
