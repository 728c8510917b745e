//! Span names shared by Momentum subsystems.
//!
//! Consistent names keep log queries uniform between the engine's
//! per-subject events and the batch summaries.

/// Scoring a single subject.
pub const SUBJECT_SPAN: &str = "momentum.subject";

/// Scoring a batch of subjects.
pub const BATCH_SPAN: &str = "momentum.batch";

/// Top-K query (batch scoring plus ranking).
pub const TOP_K_SPAN: &str = "momentum.top_k";
