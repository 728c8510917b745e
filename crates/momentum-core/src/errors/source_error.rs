//! Mention source errors.

use super::error_code::{self, MomentumErrorCode};
use super::ValidationError;

/// Errors reported by a [`crate::traits::MentionSource`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Mention source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Unknown subject: {subject}")]
    UnknownSubject { subject: String },

    #[error("Invalid mention record: {0}")]
    InvalidRecord(#[from] ValidationError),
}

impl MomentumErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRecord(e) => e.error_code(),
            _ => error_code::SOURCE_ERROR,
        }
    }
}
