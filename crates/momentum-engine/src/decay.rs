//! Exponential half-life decay and the trend score built on it.
//!
//! ```text
//! weight(age)  = e^(−age · ln2 / halfLife)        (0 for age < 0)
//! trendScore   = Σ count × weight(age) × bonus(age)
//! bonus(age)   = recencyBonusMultiplier if age ≤ recencyBonusDays, else 1
//! ```

use std::f64::consts::LN_2;

use momentum_core::config::DecayConfig;
use momentum_core::types::{CalendarDay, Mention};

/// Weight of a mention `age_days` old. 1.0 today, 0.5 at one half-life,
/// 0.0 for future-dated mentions.
pub fn decay_weight(age_days: f64, half_life_days: f64) -> f64 {
    if age_days < 0.0 {
        return 0.0;
    }
    (-age_days * LN_2 / half_life_days).exp()
}

/// Decay-weighted score of a sparse history as of `now`.
///
/// Consumes the sparse form directly, so the history is not limited to the
/// dense window. Empty or all-future input scores 0 (positive zero, so
/// ranking ties compare equal under `total_cmp`).
pub fn trend_score(sparse: &[Mention], now: CalendarDay, config: &DecayConfig) -> f64 {
    sparse
        .iter()
        .map(|m| {
            let age = now.days_since(m.date);
            if age < 0 {
                return 0.0;
            }
            let weight = decay_weight(age as f64, config.half_life_days());
            let bonus = if age <= i64::from(config.recency_bonus_days()) {
                config.recency_bonus_multiplier()
            } else {
                1.0
            };
            f64::from(m.count) * weight * bonus
        })
        .fold(0.0, |acc, x| acc + x)
}
