//! Timeline configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for dense timeline construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TimelineConfig {
    /// Trailing days in a filled timeline. Default: 14.
    pub window_days: Option<usize>,
}

impl TimelineConfig {
    /// Returns the effective window size, defaulting to 14.
    pub fn effective_window_days(&self) -> usize {
        self.window_days.unwrap_or(defaults::DEFAULT_WINDOW_DAYS)
    }
}
