//! Tracing initialization.

pub mod events;

use std::sync::Once;

use a11y_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "A11Y_LOG";

static INIT: Once = Once::new();

/// Human-readable output.
///
/// Reads `A11Y_LOG` (e.g. `A11Y_LOG=a11y_pipeline=debug,info`), falling back
/// to `info`. Idempotent; does nothing if another subscriber is already set.
pub fn init_tracing() {
    install(None, false);
}

/// Same as [`init_tracing`] with one JSON object per line.
pub fn init_tracing_json() {
    install(None, true);
}

/// Use the configured level as the fallback filter and format.
pub fn init_from_config(config: &ObservabilityConfig) {
    install(Some(&config.log_level), config.json_logs);
}

fn install(default_level: Option<&str>, json: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_level.unwrap_or("info")));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if let Err(e) = result {
            tracing::debug!("tracing subscriber already installed: {e}");
        }
    });
}
