//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::DEFAULT_LOG_FILTER;

/// Environment variable holding per-target log directives.
pub const LOG_ENV_VAR: &str = "MOMENTUM_LOG";

static INIT: Once = Once::new();

/// Initialize the Momentum tracing/logging system.
///
/// Reads `MOMENTUM_LOG` for per-target log levels.
/// Format: `MOMENTUM_LOG=momentum_engine=debug,momentum_core=warn`
///
/// Falls back to `momentum=info` if `MOMENTUM_LOG` is not set or is invalid.
/// Calling it more than once is a no-op. If another subscriber is already
/// installed, that one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
