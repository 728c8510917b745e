//! Two-window velocity over a dense timeline.
//!
//! Compares the decay-weighted last 3 days (ages 2..=0) against the
//! decay-weighted 4 days before them (ages 6..=3).

use serde::Serialize;

use momentum_core::constants::{EMERGING_VELOCITY, MIN_VELOCITY_HISTORY, RECENT_WINDOW_DAYS};

use crate::decay::decay_weight;

/// Intermediate sub-window scores behind a velocity value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VelocityBreakdown {
    pub recent_score: f64,
    pub previous_score: f64,
    pub velocity: i64,
}

impl VelocityBreakdown {
    fn insufficient_history() -> Self {
        Self {
            recent_score: 0.0,
            previous_score: 0.0,
            velocity: 0,
        }
    }
}

/// Signed percentage change of the recent sub-window over the previous one.
///
/// Timelines shorter than 7 entries yield 0. A silent previous window yields
/// 100 when the recent window has activity, 0 otherwise. Otherwise the ratio
/// is rounded half away from zero and left unclamped, apart from saturating
/// at the `i64` bounds.
pub fn calculate_velocity(counts: &[u32], half_life_days: f64) -> i64 {
    velocity_breakdown(counts, half_life_days).velocity
}

/// [`calculate_velocity`] with the sub-window scores exposed.
pub fn velocity_breakdown(counts: &[u32], half_life_days: f64) -> VelocityBreakdown {
    let n = counts.len();
    if n < MIN_VELOCITY_HISTORY {
        return VelocityBreakdown::insufficient_history();
    }

    let recent = &counts[n - RECENT_WINDOW_DAYS..];
    let previous = &counts[n - MIN_VELOCITY_HISTORY..n - RECENT_WINDOW_DAYS];

    // Ages run from the end of the whole timeline, so the previous window's
    // ages start right after the recent window's.
    let recent_score = window_score(recent, 0, half_life_days);
    let previous_score = window_score(previous, RECENT_WINDOW_DAYS, half_life_days);

    VelocityBreakdown {
        recent_score,
        previous_score,
        velocity: percent_change(recent_score, previous_score),
    }
}

/// Percentage change, rounded half away from zero.
///
/// Not clamped to any business range, but bounded by `i64`: with a tiny
/// half-life the previous window's weight can underflow towards zero and the
/// ratio exceed `i64::MAX`, in which case the result saturates at
/// `i64::MAX` (or `i64::MIN`).
fn percent_change(recent_score: f64, previous_score: f64) -> i64 {
    if previous_score == 0.0 {
        return if recent_score > 0.0 { EMERGING_VELOCITY } else { 0 };
    }
    let percent = ((recent_score - previous_score) / previous_score * 100.0).round();
    if percent >= i64::MAX as f64 {
        i64::MAX
    } else if percent <= i64::MIN as f64 {
        i64::MIN
    } else {
        percent as i64
    }
}

/// Decay-weighted sum of an oldest-to-newest slice whose newest entry is
/// `newest_age` days old.
fn window_score(window: &[u32], newest_age: usize, half_life_days: f64) -> f64 {
    let len = window.len();
    window
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let age = newest_age + (len - 1 - i);
            f64::from(count) * decay_weight(age as f64, half_life_days)
        })
        .fold(0.0, |acc, x| acc + x)
}
