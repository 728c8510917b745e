use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FilledTimeline, TrendResult};

/// Identifier of a tracked subject (e.g. a player's slug).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SubjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One subject's trend plus the dense timeline behind it, for top-K
/// listings and sparkline rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectTrend {
    pub subject: SubjectId,
    pub result: TrendResult,
    pub timeline: FilledTimeline,
}
