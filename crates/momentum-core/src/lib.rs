//! # momentum-core
//!
//! Foundation crate for the Momentum trend engine.
//! Defines calendar-day types, mention records, trend results, errors,
//! configuration, tracing setup, and the mention-source trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{DecayConfig, DecayParams, MomentumConfig};
pub use errors::{ConfigError, EngineError, SourceError, ValidationError};
pub use traits::{InMemoryMentionSource, MentionSource};
pub use types::{
    CalendarDay, FilledTimeline, Mention, MentionRecord, MomentumPhase, SubjectId, SubjectTrend,
    TrendResult,
};
