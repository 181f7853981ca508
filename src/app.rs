//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use pushover::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing required values, bad config file, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Delivery error (exit code 2) - network failure, malformed response, message rejected.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Log levels by verbosity, starting at verbosity 0.
const LEVELS: [Level; 4] = [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG];

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if error.is_missing_values() || matches!(error, ConfigError::FileRead { .. }) {
        eprintln!("\nRun 'pushover config defaults' to generate a configuration template.");
    }
}

/// Maps a verbosity to a log level; `None` disables logging.
pub fn log_level(verbosity: i8) -> Option<Level> {
    let index = usize::try_from(verbosity).ok()?;
    Some(LEVELS[index.min(LEVELS.len() - 1)])
}

/// Sets up the tracing subscriber for logging.
///
/// `RUST_LOG` directives take precedence over the verbosity level.
pub fn setup_tracing(verbosity: i8) {
    let Some(level) = log_level(verbosity) else {
        return;
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
