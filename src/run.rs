//! Message sending flow.
//!
//! resolve preset → build message → send → interpret the response.

use std::process::ExitCode;

use thiserror::Error;

use pushover::api::{ApiResponse, Dispatcher, HttpClient, ReqwestClient, SendError};
use pushover::config::{
    Cli, ConfigError, ConfigStore, Preset, PresetOverrides, load_config, resolve_preset,
};
use pushover::message::{Message, MessageError, MessageOverrides, build_message};

use crate::app::exit_code;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for the sending flow.
#[derive(Debug, Error)]
pub enum RunError {
    /// Config files, preset lookup or preset validation failed.
    #[error("Unable to configure: {0}")]
    Config(#[from] ConfigError),

    /// The message could not be built from the arguments.
    #[error("Invalid message: {0}")]
    Message(#[from] MessageError),

    /// Failed to start the async runtime.
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The message could not be delivered.
    #[error("Message failed: {0}")]
    Send(#[from] SendError),
}

impl RunError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) | Self::Message(_) => exit_code::CONFIG_ERROR,
            Self::Runtime(_) | Self::Send(_) => exit_code::runtime_error(),
        }
    }
}

/// Resolves the preset and builds the message from command-line arguments.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the preset is
/// unknown or invalid, or the message is empty or has invalid fields.
pub fn prepare(cli: &Cli) -> Result<(Preset, Message), RunError> {
    let store = load_config(cli.config.as_deref())?;
    prepare_from(&store, cli)
}

/// Resolves the preset from an already loaded store and builds the message.
///
/// # Errors
///
/// Returns an error if the preset is unknown or invalid, or the message is
/// empty or has invalid fields.
pub fn prepare_from(store: &ConfigStore, cli: &Cli) -> Result<(Preset, Message), RunError> {
    let preset = resolve_preset(store, cli.preset.as_deref(), &PresetOverrides::from(cli))?;
    let message = build_message(&cli.message, &MessageOverrides::from(cli))?;
    tracing::debug!("message: {message:?}");
    Ok((preset, message))
}

/// Sends the message on a single-threaded runtime, blocking until the
/// service replies.
///
/// # Errors
///
/// Returns an error if the runtime cannot start or delivery fails.
#[cfg(not(tarpaulin_include))]
pub fn send_blocking(preset: &Preset, message: &Message) -> Result<ApiResponse, RunError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)?;

    let dispatcher = Dispatcher::new(ReqwestClient::new());
    Ok(runtime.block_on(deliver(&dispatcher, preset, message))?)
}

/// Sends the message with the given dispatcher.
///
/// # Errors
///
/// Returns an error if delivery fails at the transport level.
pub async fn deliver<H: HttpClient>(
    dispatcher: &Dispatcher<H>,
    preset: &Preset,
    message: &Message,
) -> Result<ApiResponse, SendError> {
    dispatcher.send(preset, message).await
}

/// Logs the outcome of a delivery and returns the matching exit code.
pub fn report(response: &ApiResponse) -> ExitCode {
    if response.is_success() {
        tracing::info!(
            "Sent message ({})",
            response.request.as_deref().unwrap_or("no request id")
        );
        return exit_code::SUCCESS;
    }

    if response.errors.is_empty() {
        tracing::error!("no errors");
    }
    for error in &response.errors {
        tracing::error!("{error}");
    }
    tracing::error!("message failed (status {})", response.status);
    exit_code::runtime_error()
}
