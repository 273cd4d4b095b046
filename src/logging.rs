//! Logging configuration and initialization
//!
//! The library itself only emits `tracing` events. Binaries and tests that want
//! to see them call [`init_logging`] once.

use crate::config::settings::{LoggingSettings, LOG_FILTER_VAR};
use crate::error::{ErrorCode, Result, ToolbeltError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber configured by `settings`
///
/// Fails with a configuration error when the filter directive is malformed or
/// a global subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_new(&settings.filter).map_err(|e| {
        ToolbeltError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("Invalid log filter '{}'", settings.filter),
            Some(LOG_FILTER_VAR.to_string()),
        )
        .with_source(e)
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(settings.verbosity >= 2) // Show target module for level 2 and above
        .with_thread_ids(settings.verbosity >= 3)
        .with_line_number(settings.verbosity >= 3)
        .try_init()
        .map_err(|e| {
            ToolbeltError::config_with_code(
                ErrorCode::CONFIG_LOGGING_INIT,
                "A global tracing subscriber is already installed",
                None,
            )
            .with_source(e)
        })?;

    debug!(
        "Logging initialized with filter '{}' at verbosity {}",
        settings.filter, settings.verbosity
    );
    Ok(())
}

/// Initialize logging from `TOOLBELT_LOG` / `TOOLBELT_LOG_VERBOSE`
pub fn init_logging_from_env() -> Result<()> {
    init_logging(&LoggingSettings::load()?)
}
