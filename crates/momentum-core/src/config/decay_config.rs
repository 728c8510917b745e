//! Decay and phase-threshold configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::UNIFORM_HALF_LIFE_DAYS;
use crate::errors::ConfigError;

/// Unvalidated decay parameters. Turn into a [`DecayConfig`] with
/// [`DecayConfig::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayParams {
    /// Days for a mention's weight to halve. Must be > 0.
    pub half_life_days: f64,
    /// Mentions at most this many days old get the recency bonus.
    pub recency_bonus_days: u32,
    /// Multiplier applied inside the bonus window. Must be ≥ 1.
    pub recency_bonus_multiplier: f64,
    pub hot_score_threshold: f64,
    pub hot_velocity_threshold: f64,
    pub rising_velocity_threshold: f64,
    pub cooling_velocity_threshold: f64,
    pub min_active_score: f64,
    pub cold_threshold_days: u32,
    pub cold_score_threshold: f64,
}

impl Default for DecayParams {
    fn default() -> Self {
        Self {
            half_life_days: defaults::DEFAULT_HALF_LIFE_DAYS,
            recency_bonus_days: defaults::DEFAULT_RECENCY_BONUS_DAYS,
            recency_bonus_multiplier: defaults::DEFAULT_RECENCY_BONUS_MULTIPLIER,
            hot_score_threshold: defaults::DEFAULT_HOT_SCORE_THRESHOLD,
            hot_velocity_threshold: defaults::DEFAULT_HOT_VELOCITY_THRESHOLD,
            rising_velocity_threshold: defaults::DEFAULT_RISING_VELOCITY_THRESHOLD,
            cooling_velocity_threshold: defaults::DEFAULT_COOLING_VELOCITY_THRESHOLD,
            min_active_score: defaults::DEFAULT_MIN_ACTIVE_SCORE,
            cold_threshold_days: defaults::DEFAULT_COLD_THRESHOLD_DAYS,
            cold_score_threshold: defaults::DEFAULT_COLD_SCORE_THRESHOLD,
        }
    }
}

/// Validated, immutable decay configuration.
///
/// The only ways to obtain one are [`DecayConfig::new`], [`Default`],
/// [`DecayConfig::uniform_weighting`] and deserialization, all of which
/// validate. Scoring code can therefore assume a positive, finite half-life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DecayParams", into = "DecayParams")]
pub struct DecayConfig {
    params: DecayParams,
}

impl DecayConfig {
    pub fn new(params: DecayParams) -> Result<Self, ConfigError> {
        Self::validate(&params)?;
        Ok(Self { params })
    }

    /// Near-flat weighting across any realistic window: velocity degenerates
    /// to a plain percentage change of raw recent vs previous counts.
    pub fn uniform_weighting() -> Self {
        Self {
            params: DecayParams {
                half_life_days: UNIFORM_HALF_LIFE_DAYS,
                ..DecayParams::default()
            },
        }
    }

    fn validate(p: &DecayParams) -> Result<(), ConfigError> {
        if !p.half_life_days.is_finite() || p.half_life_days <= 0.0 {
            return Err(ConfigError::validation(
                "half_life_days",
                format!("must be a finite number > 0, got {}", p.half_life_days),
            ));
        }
        if !p.recency_bonus_multiplier.is_finite() || p.recency_bonus_multiplier < 1.0 {
            return Err(ConfigError::validation(
                "recency_bonus_multiplier",
                format!("must be a finite number ≥ 1, got {}", p.recency_bonus_multiplier),
            ));
        }
        let thresholds = [
            ("hot_score_threshold", p.hot_score_threshold),
            ("hot_velocity_threshold", p.hot_velocity_threshold),
            ("rising_velocity_threshold", p.rising_velocity_threshold),
            ("cooling_velocity_threshold", p.cooling_velocity_threshold),
            ("min_active_score", p.min_active_score),
            ("cold_score_threshold", p.cold_score_threshold),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() {
                return Err(ConfigError::validation(
                    field,
                    format!("must be a finite number, got {value}"),
                ));
            }
        }
        Ok(())
    }

    pub fn params(&self) -> &DecayParams {
        &self.params
    }

    pub fn half_life_days(&self) -> f64 {
        self.params.half_life_days
    }

    pub fn recency_bonus_days(&self) -> u32 {
        self.params.recency_bonus_days
    }

    pub fn recency_bonus_multiplier(&self) -> f64 {
        self.params.recency_bonus_multiplier
    }

    pub fn hot_score_threshold(&self) -> f64 {
        self.params.hot_score_threshold
    }

    pub fn hot_velocity_threshold(&self) -> f64 {
        self.params.hot_velocity_threshold
    }

    pub fn rising_velocity_threshold(&self) -> f64 {
        self.params.rising_velocity_threshold
    }

    pub fn cooling_velocity_threshold(&self) -> f64 {
        self.params.cooling_velocity_threshold
    }

    pub fn min_active_score(&self) -> f64 {
        self.params.min_active_score
    }

    pub fn cold_threshold_days(&self) -> u32 {
        self.params.cold_threshold_days
    }

    pub fn cold_score_threshold(&self) -> f64 {
        self.params.cold_score_threshold
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            params: DecayParams::default(),
        }
    }
}

impl TryFrom<DecayParams> for DecayConfig {
    type Error = ConfigError;

    fn try_from(params: DecayParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl From<DecayConfig> for DecayParams {
    fn from(config: DecayConfig) -> Self {
        config.params
    }
}

/// `[decay]` section of a config file. Unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecaySettings {
    pub half_life_days: Option<f64>,
    pub recency_bonus_days: Option<u32>,
    pub recency_bonus_multiplier: Option<f64>,
    pub hot_score_threshold: Option<f64>,
    pub hot_velocity_threshold: Option<f64>,
    pub rising_velocity_threshold: Option<f64>,
    pub cooling_velocity_threshold: Option<f64>,
    pub min_active_score: Option<f64>,
    pub cold_threshold_days: Option<u32>,
    pub cold_score_threshold: Option<f64>,
}

impl DecaySettings {
    /// Returns the effective parameters, filling unset fields from defaults.
    pub fn effective_params(&self) -> DecayParams {
        let d = DecayParams::default();
        DecayParams {
            half_life_days: self.half_life_days.unwrap_or(d.half_life_days),
            recency_bonus_days: self.recency_bonus_days.unwrap_or(d.recency_bonus_days),
            recency_bonus_multiplier: self
                .recency_bonus_multiplier
                .unwrap_or(d.recency_bonus_multiplier),
            hot_score_threshold: self.hot_score_threshold.unwrap_or(d.hot_score_threshold),
            hot_velocity_threshold: self
                .hot_velocity_threshold
                .unwrap_or(d.hot_velocity_threshold),
            rising_velocity_threshold: self
                .rising_velocity_threshold
                .unwrap_or(d.rising_velocity_threshold),
            cooling_velocity_threshold: self
                .cooling_velocity_threshold
                .unwrap_or(d.cooling_velocity_threshold),
            min_active_score: self.min_active_score.unwrap_or(d.min_active_score),
            cold_threshold_days: self.cold_threshold_days.unwrap_or(d.cold_threshold_days),
            cold_score_threshold: self.cold_score_threshold.unwrap_or(d.cold_score_threshold),
        }
    }

    /// Overlay every `Some` field of `other` onto `self`.
    pub fn merge_from(&mut self, other: &DecaySettings) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        take!(
            half_life_days,
            recency_bonus_days,
            recency_bonus_multiplier,
            hot_score_threshold,
            hot_velocity_threshold,
            rising_velocity_threshold,
            cooling_velocity_threshold,
            min_active_score,
            cold_threshold_days,
            cold_score_threshold,
        );
    }
}
