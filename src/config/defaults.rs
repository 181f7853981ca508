//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Default message API endpoint.
pub const API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Config file basename.
pub const CONFIG_FILENAME: &str = "pushover.conf";

/// Directory name appended to every configuration search directory.
pub const CONFIG_DIRNAME: &str = "pushover";

/// Section holding fallback values for every preset.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Name of the commented-out preset in the generated configuration.
pub const EXAMPLE_PRESET: &str = "example";

/// Fallback for `XDG_DATA_DIRS`.
pub const XDG_DATA_DIRS: &str = "/usr/local/share:/usr/share";

/// Fallback for `XDG_CONFIG_DIRS`.
pub const XDG_CONFIG_DIRS: &str = "/etc/xdg";
