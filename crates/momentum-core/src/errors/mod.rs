//! Error handling for Momentum.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod source_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::MomentumErrorCode;
pub use source_error::SourceError;
pub use validation_error::ValidationError;
