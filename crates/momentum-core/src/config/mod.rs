//! Configuration system for Momentum.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod decay_config;
pub mod defaults;
pub mod momentum_config;
pub mod ranking_config;
pub mod timeline_config;

pub use decay_config::{DecayConfig, DecayParams, DecaySettings};
pub use momentum_config::{CliOverrides, MomentumConfig};
pub use ranking_config::RankingConfig;
pub use timeline_config::TimelineConfig;
