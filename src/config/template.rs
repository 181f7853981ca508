//! Default configuration file generation.

use std::path::Path;

use super::defaults::EXAMPLE_PRESET;
use super::error::ConfigError;
use super::preset::example_preset;
use super::store::ConfigStore;

/// Generates the default configuration: a default section with every
/// preset field, followed by a commented-out example preset.
///
/// # Errors
///
/// Returns an error if the example values do not form a preset.
pub fn default_config_template() -> Result<String, ConfigError> {
    let mut output = ConfigStore::with_schema_defaults().dumps();

    let mut example = ConfigStore::new();
    example.set_preset(EXAMPLE_PRESET, &example_preset()?);
    for line in example.dumps().lines() {
        output.push_str("# ");
        output.push_str(line);
        output.push('\n');
    }
    Ok(output)
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = default_config_template()?;
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
