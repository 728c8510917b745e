//! Errors surfaced by the orchestrating engine calls.

use super::error_code::MomentumErrorCode;
use super::{ConfigError, SourceError, ValidationError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source error for subject {subject}: {source}")]
    Source {
        subject: String,
        #[source]
        source: SourceError,
    },
}

impl MomentumErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Source { source, .. } => source.error_code(),
        }
    }
}
