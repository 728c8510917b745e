//! Priority-ordered momentum phase classifier.
//!
//! Rules are not mutually exclusive; the first match wins:
//!
//! 1. dormant: no history, or silent ≥ cold_threshold_days with score < cold_score_threshold
//! 2. hot: score ≥ hot_score_threshold, velocity ≥ hot_velocity_threshold, silent ≤ recency_bonus_days
//! 3. rising: velocity ≥ rising_velocity_threshold, score ≥ min_active_score
//! 4. cooling: velocity ≤ cooling_velocity_threshold, or silent > 3 days with score < min_active_score
//! 5. stable: otherwise

use momentum_core::config::DecayConfig;
use momentum_core::constants::COOLING_SILENCE_DAYS;
use momentum_core::types::MomentumPhase;

/// Assign a phase from score, velocity, and days since the last mention
/// (`None` = no history at all).
pub fn classify(
    trend_score: f64,
    velocity: i64,
    days_since_last_mention: Option<u32>,
    config: &DecayConfig,
) -> MomentumPhase {
    let Some(silent_days) = days_since_last_mention else {
        return MomentumPhase::Dormant;
    };
    let velocity = velocity as f64;

    if silent_days >= config.cold_threshold_days() && trend_score < config.cold_score_threshold() {
        return MomentumPhase::Dormant;
    }

    if trend_score >= config.hot_score_threshold()
        && velocity >= config.hot_velocity_threshold()
        && silent_days <= config.recency_bonus_days()
    {
        return MomentumPhase::Hot;
    }

    if velocity >= config.rising_velocity_threshold() && trend_score >= config.min_active_score() {
        return MomentumPhase::Rising;
    }

    if velocity <= config.cooling_velocity_threshold()
        || (silent_days > COOLING_SILENCE_DAYS && trend_score < config.min_active_score())
    {
        return MomentumPhase::Cooling;
    }

    MomentumPhase::Stable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DecayConfig {
        DecayConfig::default()
    }

    #[test]
    fn no_history_is_dormant_regardless_of_other_inputs() {
        assert_eq!(classify(100.0, 500, None, &config()), MomentumPhase::Dormant);
    }

    #[test]
    fn long_silence_with_no_score_is_dormant() {
        assert_eq!(classify(0.0, 0, Some(10), &config()), MomentumPhase::Dormant);
    }

    #[test]
    fn long_silence_with_residual_score_is_not_dormant() {
        // 7 days silent but score still above the cold threshold.
        assert_ne!(classify(0.8, 0, Some(7), &config()), MomentumPhase::Dormant);
    }

    #[test]
    fn hot_beats_rising() {
        // Satisfies both the hot and the rising predicates.
        assert_eq!(classify(10.0, 120, Some(0), &config()), MomentumPhase::Hot);
    }

    #[test]
    fn hot_requires_recent_mention() {
        // Same numbers, but last mention is outside the recency bonus window.
        assert_eq!(classify(10.0, 120, Some(4), &config()), MomentumPhase::Rising);
    }

    #[test]
    fn rising_needs_active_score() {
        assert_eq!(classify(2.0, 25, Some(1), &config()), MomentumPhase::Rising);
        assert_ne!(classify(0.5, 25, Some(1), &config()), MomentumPhase::Rising);
    }

    #[test]
    fn cooling_on_sharp_drop() {
        assert_eq!(classify(3.0, -30, Some(1), &config()), MomentumPhase::Cooling);
    }

    #[test]
    fn cooling_on_quiet_low_score() {
        assert_eq!(classify(0.6, 0, Some(4), &config()), MomentumPhase::Cooling);
        // Three quiet days is not enough.
        assert_eq!(classify(0.6, 0, Some(3), &config()), MomentumPhase::Stable);
    }

    #[test]
    fn flat_activity_is_stable() {
        assert_eq!(classify(3.0, 5, Some(1), &config()), MomentumPhase::Stable);
    }
}
