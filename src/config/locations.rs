//! Configuration file search locations.
//!
//! Files are looked up in XDG base directories, from lowest to highest
//! priority:
//!
//! 1. every `$XDG_DATA_DIRS` entry, last entry first
//! 2. every `$XDG_CONFIG_DIRS` entry, last entry first
//! 3. `$XDG_CONFIG_HOME`
//!
//! with `pushover/pushover.conf` appended. A file later in the list
//! overrides values from earlier ones.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::defaults;
use super::error::ConfigError;
use super::store::ConfigStore;

/// Returns every candidate config file path, lowest priority first.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    search_paths_from(|key| std::env::var_os(key), dirs::config_dir())
}

/// Returns every candidate config file path for the given environment.
///
/// `config_home` is used when `XDG_CONFIG_HOME` is unset or empty.
pub fn search_paths_from<F>(env: F, config_home: Option<PathBuf>) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let list = |key: &str, fallback: &str| -> Vec<PathBuf> {
        let value = env(key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| OsString::from(fallback));
        std::env::split_paths(&value)
            .filter(|p| !p.as_os_str().is_empty())
            .collect()
    };

    let home = env("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or(config_home);

    list("XDG_DATA_DIRS", defaults::XDG_DATA_DIRS)
        .into_iter()
        .rev()
        .chain(
            list("XDG_CONFIG_DIRS", defaults::XDG_CONFIG_DIRS)
                .into_iter()
                .rev(),
        )
        .chain(home)
        .map(|dir| {
            dir.join(defaults::CONFIG_DIRNAME)
                .join(defaults::CONFIG_FILENAME)
        })
        .collect()
}

/// Filters a list of paths down to the files that exist.
#[must_use]
pub fn existing(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.into_iter().filter(|p| p.is_file()).collect()
}

/// Loads every existing config file from the search path, then the
/// explicitly given file (which must exist).
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigStore, ConfigError> {
    load_config_from(existing(search_paths()), explicit)
}

/// Loads the given files in order, then the explicitly given file.
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed.
pub fn load_config_from(
    found: Vec<PathBuf>,
    explicit: Option<&Path>,
) -> Result<ConfigStore, ConfigError> {
    let mut store = ConfigStore::new();
    for path in found.iter().map(PathBuf::as_path).chain(explicit) {
        tracing::debug!("found config {}", path.display());
        store.load(path)?;
    }
    Ok(store)
}
