//! API presets: endpoint and credentials.

use crate::options::{OptionDef, OptionError, OptionSet, Schema, Value, convert};

use super::defaults;
use super::error::ConfigError;
use super::store::ConfigStore;

/// Field names of the [`Preset`] record, as used in config files.
pub mod field {
    /// Message API endpoint.
    pub const URL: &str = "api_url";
    /// User (or group) key.
    pub const USER: &str = "api_user";
    /// Application token.
    pub const TOKEN: &str = "api_token";
    /// Target device name.
    pub const DEVICE: &str = "api_device";
}

/// Schema marker for [`Preset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresetSchema;

/// Endpoint and credentials needed to reach the message API.
pub type Preset = OptionSet<PresetSchema>;

static OPTIONS: [OptionDef; 4] = [
    OptionDef::new(field::URL)
        .with_default(default_url)
        .with_deserializer(convert::text),
    OptionDef::new(field::USER).with_deserializer(convert::text),
    OptionDef::new(field::TOKEN).with_deserializer(convert::text),
    OptionDef::new(field::DEVICE)
        .optional()
        .with_deserializer(convert::text),
];

impl Schema for PresetSchema {
    const KIND: &'static str = "Preset";

    fn options() -> &'static [OptionDef] {
        &OPTIONS
    }
}

#[allow(clippy::unnecessary_wraps)] // signature fixed by `DefaultFn`
fn default_url() -> Option<Value> {
    Some(Value::from(defaults::API_URL))
}

/// Values written (commented out) to the generated configuration.
pub const EXAMPLE_VALUES: [(&str, &str); 3] = [
    (field::USER, "example-user"),
    (field::TOKEN, "example-token"),
    (field::DEVICE, "example-device"),
];

/// Builds the example preset from [`EXAMPLE_VALUES`].
///
/// # Errors
///
/// Returns an error if an example value does not fit the schema.
pub fn example_preset() -> Result<Preset, OptionError> {
    Preset::from_dict(EXAMPLE_VALUES)
}

impl OptionSet<PresetSchema> {
    /// Returns the API endpoint.
    #[must_use]
    pub fn api_url(&self) -> Option<String> {
        self.text(field::URL)
    }

    /// Returns the user key.
    #[must_use]
    pub fn api_user(&self) -> Option<String> {
        self.text(field::USER)
    }

    /// Returns the application token.
    #[must_use]
    pub fn api_token(&self) -> Option<String> {
        self.text(field::TOKEN)
    }

    /// Returns the target device, if any.
    #[must_use]
    pub fn api_device(&self) -> Option<String> {
        self.text(field::DEVICE).filter(|device| !device.is_empty())
    }
}

/// Preset values given explicitly on the command line.
///
/// `None` leaves the resolved value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetOverrides {
    /// Endpoint override
    pub api_url: Option<String>,
    /// User key override
    pub api_user: Option<String>,
    /// Application token override
    pub api_token: Option<String>,
    /// Device override
    pub api_device: Option<String>,
}

impl PresetOverrides {
    /// Applies every provided override to the preset.
    ///
    /// # Errors
    ///
    /// Returns an error if a value fails to deserialize.
    pub fn apply(&self, preset: &mut Preset) -> Result<(), OptionError> {
        let pairs = [
            (field::URL, &self.api_url),
            (field::USER, &self.api_user),
            (field::TOKEN, &self.api_token),
            (field::DEVICE, &self.api_device),
        ];
        for (name, value) in pairs {
            if let Some(value) = value {
                tracing::debug!("using {name} from args");
                preset.set(name, value.as_str())?;
            }
        }
        Ok(())
    }
}

/// Resolves a preset: schema defaults, then the store's default section,
/// then the named section, then command-line overrides. The result is
/// validated.
///
/// # Errors
///
/// - [`ConfigError::UnknownPreset`] if `name` is not a section of the store
/// - [`ConfigError::Option`] if a value is invalid or required values are missing
pub fn resolve_preset(
    store: &ConfigStore,
    name: Option<&str>,
    overrides: &PresetOverrides,
) -> Result<Preset, ConfigError> {
    let mut preset = store.get_preset(name)?;
    tracing::debug!(
        "using preset {}: {preset:?}",
        name.unwrap_or(defaults::DEFAULT_SECTION)
    );

    overrides.apply(&mut preset)?;
    preset.validate()?;
    Ok(preset)
}
