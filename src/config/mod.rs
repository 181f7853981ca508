//! Configuration layer for pushover.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`ConfigCommand`])
//! - API presets ([`Preset`]) and their resolution ([`resolve_preset`])
//! - The INI-backed preset store ([`ConfigStore`])
//! - Config file discovery ([`search_paths`], [`load_config`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Preset values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** (`--api`, `--user`, `--token`, `--device`)
//! 2. **Named preset section** selected with `--preset`
//! 3. **Default section** of the merged config files
//! 4. **Built-in defaults** (only `api_url` has one)
//!
//! Layering is done on raw string values; each field is deserialized once.
//! Config files found later on the search path override earlier ones, and
//! the file given with `--config` is loaded last.

mod cli;
pub mod defaults;
mod error;
mod locations;
mod preset;
mod store;
mod template;

#[cfg(test)]
mod preset_tests;

pub use cli::{Cli, Command, ConfigCommand};
pub use error::ConfigError;
pub use locations::{existing, load_config, load_config_from, search_paths, search_paths_from};
pub use preset::{
    EXAMPLE_VALUES, Preset, PresetOverrides, PresetSchema, example_preset, field, resolve_preset,
};
pub use store::{ConfigStore, RawSection};
pub use template::{default_config_template, write_default_config};
