//! Ranking configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for top-K trend listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RankingConfig {
    /// Subjects returned by a top-K query. Default: 20.
    pub top_k: Option<usize>,
}

impl RankingConfig {
    /// Returns the effective top-K, defaulting to 20.
    pub fn effective_top_k(&self) -> usize {
        self.top_k.unwrap_or(defaults::DEFAULT_TOP_K)
    }
}
