//! # momentum-engine
//!
//! Turns sparse per-day mention counts into a trend score, a velocity,
//! a momentum phase, and a rank.
//! Components: timeline builder, half-life decay scorer, two-window velocity,
//! priority-ordered phase classifier, stable ranker.
//! Every function here is pure; batch scoring fans out with rayon.

pub mod decay;
pub mod engine;
pub mod phase;
pub mod ranking;
pub mod timeline;
pub mod velocity;

pub use decay::{decay_weight, trend_score};
pub use engine::{compute_trend, TrendBreakdown, TrendEngine};
pub use phase::classify;
pub use ranking::{rank, rank_trends};
pub use timeline::build_timeline;
pub use velocity::{calculate_velocity, velocity_breakdown, VelocityBreakdown};
