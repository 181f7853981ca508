//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::message::MessageOverrides;

use super::preset::PresetOverrides;

/// Send a message using Pushover.
///
/// API settings come from the configuration files, the selected preset and
/// the API options below, in increasing order of precedence. Use `--` before
/// message text that starts with a subcommand name.
#[derive(Debug, Parser)]
#[command(name = "pushover")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Read config from FILE, after the standard locations
    #[arg(
        long,
        short,
        value_name = "FILE",
        global = true,
        help_heading = "Configuration"
    )]
    pub config: Option<PathBuf>,

    /// Use the PRESET section from config
    #[arg(long, short, value_name = "PRESET", help_heading = "Configuration")]
    pub preset: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(
        short,
        action = ArgAction::Count,
        global = true,
        conflicts_with = "quiet",
        help_heading = "Logging"
    )]
    pub verbose: u8,

    /// Silent mode: disable logging output
    #[arg(long, short, global = true, help_heading = "Logging")]
    pub quiet: bool,

    /// Override api_url from config
    #[arg(long = "api", value_name = "URL", help_heading = "API options")]
    pub api_url: Option<String>,

    /// Override api_user from config
    #[arg(long = "user", value_name = "USER", help_heading = "API options")]
    pub api_user: Option<String>,

    /// Override api_token from config
    #[arg(long = "token", value_name = "TOKEN", help_heading = "API options")]
    pub api_token: Option<String>,

    /// Override api_device from config
    #[arg(
        long = "device",
        short = 'd',
        value_name = "DEVICE",
        help_heading = "API options"
    )]
    pub api_device: Option<String>,

    /// Set message title
    #[arg(long, short, value_name = "TEXT", help_heading = "Message options")]
    pub title: Option<String>,

    /// Include URL in message
    #[arg(long, value_name = "URL", help_heading = "Message options")]
    pub url: Option<String>,

    /// Set title of the url
    #[arg(long = "url-title", value_name = "TEXT", help_heading = "Message options")]
    pub url_title: Option<String>,

    /// Message priority: lowest, low, normal, high, emergency, or -2..2
    #[arg(
        long,
        value_name = "PRI",
        allow_negative_numbers = true,
        help_heading = "Message options"
    )]
    pub priority: Option<String>,

    /// Message time, in seconds since the Unix epoch
    #[arg(long, value_name = "EPOCH", help_heading = "Message options")]
    pub timestamp: Option<String>,

    /// Message text
    #[arg(value_name = "TEXT")]
    pub message: Vec<String>,
}

/// Subcommands for pushover
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Configuration utilities
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ConfigCommand {
    /// Write the default configuration
    Defaults {
        /// Write config to FILE (default: stdout)
        #[arg(value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show configuration file locations
    ListFiles {
        /// Only list configuration files that are present
        #[arg(long)]
        only_existing: bool,
    },

    /// Show the effective configuration
    DumpConfig {
        /// Validate every preset before printing
        #[arg(long)]
        validate: bool,
    },

    /// Show presets in the effective configuration
    ListPresets,

    /// Show the resolved values of a preset
    ShowPreset {
        /// Preset name (default: the default section)
        #[arg(value_name = "PRESET")]
        preset: Option<String>,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the logging verbosity: -1 when quiet, else the `-v` count.
    #[must_use]
    pub fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            i8::try_from(self.verbose).unwrap_or(i8::MAX)
        }
    }
}

impl From<&Cli> for PresetOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            api_user: cli.api_user.clone(),
            api_token: cli.api_token.clone(),
            api_device: cli.api_device.clone(),
        }
    }
}

impl From<&Cli> for MessageOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            title: cli.title.clone(),
            url: cli.url.clone(),
            url_title: cli.url_title.clone(),
            priority: cli.priority.clone(),
            timestamp: cli.timestamp.clone(),
        }
    }
}
