//! Input validation errors.

use super::error_code::{self, MomentumErrorCode};

/// Errors raised while turning raw mention records into typed mentions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Invalid mention count {count} on {date}: must be at least 1")]
    InvalidCount { date: String, count: i64 },
}

impl MomentumErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
