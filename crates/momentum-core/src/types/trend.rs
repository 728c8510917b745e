use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Categorical momentum state of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentumPhase {
    Hot,
    Rising,
    Stable,
    Cooling,
    Dormant,
}

impl MomentumPhase {
    pub const ALL: [MomentumPhase; 5] = [
        Self::Hot,
        Self::Rising,
        Self::Stable,
        Self::Cooling,
        Self::Dormant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Rising => "rising",
            Self::Stable => "stable",
            Self::Cooling => "cooling",
            Self::Dormant => "dormant",
        }
    }
}

impl fmt::Display for MomentumPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MomentumPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown momentum phase: {s}"))
    }
}

/// Trend state of one subject at one "now". Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Decay-weighted mention score, ≥ 0.
    pub trend_score: f64,
    /// Signed percentage change, recent vs previous sub-window. Unclamped.
    pub velocity: i64,
    pub phase: MomentumPhase,
    /// `None` when the subject has no mention history at all.
    pub days_since_last_mention: Option<u32>,
}

impl TrendResult {
    /// Result for a subject with no history.
    pub fn dormant() -> Self {
        Self {
            trend_score: 0.0,
            velocity: 0,
            phase: MomentumPhase::Dormant,
            days_since_last_mention: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_round_trip_through_strings() {
        for phase in MomentumPhase::ALL {
            assert_eq!(phase.as_str().parse::<MomentumPhase>().unwrap(), phase);
            assert_eq!(
                serde_json::to_string(&phase).unwrap(),
                format!("\"{}\"", phase.as_str())
            );
        }
        assert!("lukewarm".parse::<MomentumPhase>().is_err());
    }
}
