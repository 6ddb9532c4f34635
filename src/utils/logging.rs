//! Structured logging setup on top of `tracing-subscriber`.

use crate::config::LoggingConfig;
use crate::error::{MarshalError, Result};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Build the filter for `config`; `RUST_LOG` directives take precedence.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string().to_lowercase()))
}

/// Install a global fmt subscriber configured from `config`.
///
/// Idempotent: once a global subscriber exists, whether installed here or by
/// the host application, later calls return `Ok(())` and change nothing.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    if INSTALLED.get().is_some() || tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    match installed {
        Ok(()) => {
            let _ = INSTALLED.set(());
            tracing::info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
            Ok(())
        }
        // lost a race with another installer
        Err(_) if tracing::dispatcher::has_been_set() => Ok(()),
        Err(e) => Err(MarshalError::ConfigError(format!(
            "Failed to install logger: {e}"
        ))),
    }
}
