//! MomentumErrorCode trait for callers on the far side of a process boundary.

/// Stable, machine-readable error codes.
/// Every error enum implements this so a presentation layer can branch on
/// the code instead of parsing messages.
pub trait MomentumErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
