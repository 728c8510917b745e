// Single source of truth for all default values.

// --- Decay ---
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 3.0;
pub const DEFAULT_RECENCY_BONUS_DAYS: u32 = 3;
pub const DEFAULT_RECENCY_BONUS_MULTIPLIER: f64 = 1.25;

// --- Phase thresholds ---
pub const DEFAULT_HOT_SCORE_THRESHOLD: f64 = 5.0;
pub const DEFAULT_HOT_VELOCITY_THRESHOLD: f64 = 50.0;
pub const DEFAULT_RISING_VELOCITY_THRESHOLD: f64 = 20.0;
pub const DEFAULT_COOLING_VELOCITY_THRESHOLD: f64 = -30.0;
pub const DEFAULT_MIN_ACTIVE_SCORE: f64 = 1.0;
pub const DEFAULT_COLD_THRESHOLD_DAYS: u32 = 7;
pub const DEFAULT_COLD_SCORE_THRESHOLD: f64 = 0.5;

// --- Timeline ---
pub const DEFAULT_WINDOW_DAYS: usize = 14;

// --- Ranking ---
pub const DEFAULT_TOP_K: usize = 20;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "momentum=info";
