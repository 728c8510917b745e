//! Test fixture loader for Momentum golden scenarios.
//!
//! Provides typed deserialization of the JSON files under the workspace's
//! `test-fixtures/` directory and helpers for loading them from any crate.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use momentum_core::config::DecayParams;
use momentum_core::types::{CalendarDay, MentionRecord, MomentumPhase};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").is_dir() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// Load every golden scenario under `test-fixtures/golden/`.
pub fn golden_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden")
        .into_iter()
        .map(|path| {
            let relative = format!(
                "golden/{}",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            );
            load_fixture(&relative)
        })
        .collect()
}

/// An end-to-end scenario: subjects' raw mention records, the "now" they
/// are scored at, and the expected outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    pub now: CalendarDay,
    #[serde(default)]
    pub window_days: Option<usize>,
    #[serde(default)]
    pub decay: DecayParams,
    pub subjects: Vec<GoldenSubject>,
    #[serde(default)]
    pub expected: Vec<GoldenExpectation>,
    /// Expected rank order of all subjects, strongest first.
    #[serde(default)]
    pub expected_rank: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSubject {
    pub id: String,
    #[serde(default)]
    pub mentions: Vec<MentionRecord>,
    /// Last mention date as tracked by the data source, if it predates `mentions`.
    #[serde(default)]
    pub last_mention: Option<CalendarDay>,
}

/// Assertions for one subject. Unset fields are not checked.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub id: String,
    #[serde(default)]
    pub trend_score: Option<f64>,
    #[serde(default)]
    pub velocity: Option<i64>,
    #[serde(default)]
    pub phase: Option<MomentumPhase>,
    #[serde(default)]
    pub days_since_last_mention: Option<u32>,
    /// Expect the "no history" sentinel.
    #[serde(default)]
    pub no_history: bool,
}

/// Absolute tolerance for golden trend scores.
pub const SCORE_TOLERANCE: f64 = 1e-6;
