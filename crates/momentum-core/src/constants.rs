//! Structural constants of the trend algorithm.
//!
//! Unlike the tunable thresholds in [`crate::config::defaults`], these shape
//! the algorithm itself and are not configurable.

/// Entries in the velocity "recent" sub-window (ages 2, 1, 0).
pub const RECENT_WINDOW_DAYS: usize = 3;

/// Entries in the velocity "previous" sub-window (ages 6, 5, 4, 3).
pub const PREVIOUS_WINDOW_DAYS: usize = 4;

/// Shortest dense timeline the velocity calculator will compare.
pub const MIN_VELOCITY_HISTORY: usize = RECENT_WINDOW_DAYS + PREVIOUS_WINDOW_DAYS;

/// Velocity reported when the previous sub-window is silent but the recent one is not.
pub const EMERGING_VELOCITY: i64 = 100;

/// Days of silence after which a below-active subject counts as cooling.
pub const COOLING_SILENCE_DAYS: u32 = 3;

/// Half-life used by the uniform-weighting preset. Large enough that a
/// 14-day window is weighted within 0.01% of flat.
pub const UNIFORM_HALF_LIFE_DAYS: f64 = 1.0e6;
