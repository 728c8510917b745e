//! Top-level Momentum configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DecayConfig, DecaySettings, RankingConfig, TimelineConfig};
use crate::constants::MIN_VELOCITY_HISTORY;
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "momentum.toml";

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MOMENTUM_*`)
/// 3. Project config (`momentum.toml` in project root)
/// 4. User config (`~/.momentum/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MomentumConfig {
    pub decay: DecaySettings,
    pub timeline: TimelineConfig,
    pub ranking: RankingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub half_life_days: Option<f64>,
    pub window_days: Option<usize>,
    pub top_k: Option<usize>,
}

impl MomentumConfig {
    /// Load configuration with layered resolution. See the type docs for order.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.validate()?;
        tracing::debug!(
            window_days = config.timeline.effective_window_days(),
            top_k = config.ranking.effective_top_k(),
            "momentum config resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.decay_config()?;
        if let Some(window) = self.timeline.window_days {
            if window < MIN_VELOCITY_HISTORY {
                return Err(ConfigError::ValidationFailed {
                    field: "timeline.window_days".to_string(),
                    message: format!("must be at least {MIN_VELOCITY_HISTORY}"),
                });
            }
        }
        if self.ranking.top_k == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "ranking.top_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Build the validated decay configuration from the `[decay]` section.
    pub fn decay_config(&self) -> Result<DecayConfig, ConfigError> {
        DecayConfig::new(self.decay.effective_params()).map_err(|e| match e {
            ConfigError::ValidationFailed { field, message } => ConfigError::ValidationFailed {
                field: format!("decay.{field}"),
                message,
            },
            other => other,
        })
    }

    /// Returns the user config path: `~/.momentum/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".momentum").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut MomentumConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MomentumConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.merge(&file_config);
        Ok(())
    }

    /// Merge `other` into `self` wherever `other` has a value.
    fn merge(&mut self, other: &MomentumConfig) {
        self.decay.merge_from(&other.decay);
        if other.timeline.window_days.is_some() {
            self.timeline.window_days = other.timeline.window_days;
        }
        if other.ranking.top_k.is_some() {
            self.ranking.top_k = other.ranking.top_k;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `MOMENTUM_DECAY_HALF_LIFE_DAYS`, `MOMENTUM_TIMELINE_WINDOW_DAYS`, etc.
    /// A set but unparseable variable is an error, not a silent fallback.
    fn apply_env_overrides(config: &mut MomentumConfig) -> Result<(), ConfigError> {
        let d = &mut config.decay;
        env_override("MOMENTUM_DECAY_HALF_LIFE_DAYS", &mut d.half_life_days)?;
        env_override("MOMENTUM_DECAY_RECENCY_BONUS_DAYS", &mut d.recency_bonus_days)?;
        env_override(
            "MOMENTUM_DECAY_RECENCY_BONUS_MULTIPLIER",
            &mut d.recency_bonus_multiplier,
        )?;
        env_override("MOMENTUM_DECAY_HOT_SCORE_THRESHOLD", &mut d.hot_score_threshold)?;
        env_override(
            "MOMENTUM_DECAY_HOT_VELOCITY_THRESHOLD",
            &mut d.hot_velocity_threshold,
        )?;
        env_override(
            "MOMENTUM_DECAY_RISING_VELOCITY_THRESHOLD",
            &mut d.rising_velocity_threshold,
        )?;
        env_override(
            "MOMENTUM_DECAY_COOLING_VELOCITY_THRESHOLD",
            &mut d.cooling_velocity_threshold,
        )?;
        env_override("MOMENTUM_DECAY_MIN_ACTIVE_SCORE", &mut d.min_active_score)?;
        env_override("MOMENTUM_DECAY_COLD_THRESHOLD_DAYS", &mut d.cold_threshold_days)?;
        env_override("MOMENTUM_DECAY_COLD_SCORE_THRESHOLD", &mut d.cold_score_threshold)?;
        env_override("MOMENTUM_TIMELINE_WINDOW_DAYS", &mut config.timeline.window_days)?;
        env_override("MOMENTUM_RANKING_TOP_K", &mut config.ranking.top_k)?;
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MomentumConfig, cli: &CliOverrides) {
        if let Some(v) = cli.half_life_days {
            config.decay.half_life_days = Some(v);
        }
        if let Some(v) = cli.window_days {
            config.timeline.window_days = Some(v);
        }
        if let Some(v) = cli.top_k {
            config.ranking.top_k = Some(v);
        }
    }
}

fn env_override<T: std::str::FromStr>(key: &str, slot: &mut Option<T>) -> Result<(), ConfigError>
where
    T::Err: std::fmt::Display,
{
    if let Ok(raw) = std::env::var(key) {
        let value = raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
            field: key.to_string(),
            message: format!("{raw:?}: {e}"),
        })?;
        *slot = Some(value);
    }
    Ok(())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
