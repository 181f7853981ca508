//! INI-backed store of presets.

use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use ini::{Ini, ParseOption};

use super::defaults::DEFAULT_SECTION;
use super::error::ConfigError;
use super::preset::Preset;

/// Raw, ordered key/value pairs of one section.
pub type RawSection = IndexMap<String, String>;

/// Holder of the default section and every named preset section.
///
/// Values are kept in their raw string form. Layering happens on raw maps;
/// a [`Preset`] is only deserialized once, in [`get_preset`](Self::get_preset),
/// and is an independent snapshot of the store.
///
/// # File format
///
/// ```ini
/// [DEFAULT]
/// api_url=https://api.pushover.net/1/messages.json
/// api_user=u123
/// api_token=a456
///
/// [phone]
/// api_device=my-phone
/// ```
///
/// Keys before the first section header also belong to the default section.
/// Keys are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    defaults: RawSection,
    sections: IndexMap<String, RawSection>,
}

impl ConfigStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose default section holds every preset field,
    /// filled with the schema default or left empty.
    #[must_use]
    pub fn with_schema_defaults() -> Self {
        let defaults = Preset::defaults()
            .into_iter()
            .map(|(name, value)| {
                let option = Preset::options().iter().find(|o| o.name == name);
                let raw = match (option, value) {
                    (Some(option), Some(value)) => option.serialize(&value),
                    _ => String::new(),
                };
                (name.to_string(), raw)
            })
            .collect();
        Self {
            defaults,
            sections: IndexMap::new(),
        }
    }

    /// Returns the default section.
    #[must_use]
    pub const fn defaults(&self) -> &RawSection {
        &self.defaults
    }

    /// Returns the default section for modification.
    pub const fn defaults_mut(&mut self) -> &mut RawSection {
        &mut self.defaults
    }

    /// Returns the names of all preset sections, in file order.
    pub fn list_presets(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Returns true if a preset section with this name exists.
    #[must_use]
    pub fn has_preset(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns the raw values of a preset section.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&RawSection> {
        self.sections.get(name)
    }

    /// Resolves a preset from the default section, overlaid with the named
    /// section if a name is given.
    ///
    /// The result is not validated.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownPreset`] if `name` is not a section of the store
    /// - [`ConfigError::Option`] if a key is not a preset field
    pub fn get_preset(&self, name: Option<&str>) -> Result<Preset, ConfigError> {
        let mut merged = self.defaults.clone();
        if let Some(name) = name {
            let section = self
                .sections
                .get(name)
                .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
            merged.extend(section.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Ok(Preset::from_dict(&merged)?)
    }

    /// Stores the explicitly set fields of a preset as a section, replacing
    /// any existing section of that name.
    pub fn set_preset(&mut self, name: impl Into<String>, preset: &Preset) {
        let section = preset
            .to_explicit_dict()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        self.sections.insert(name.into(), section);
    }

    /// Removes a preset section, returning its raw values.
    pub fn remove_preset(&mut self, name: &str) -> Option<RawSection> {
        self.sections.shift_remove(name)
    }

    /// Validates every named preset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPreset`] for the first preset that does
    /// not resolve to a valid [`Preset`].
    pub fn validate_all(&self) -> Result<(), ConfigError> {
        for name in self.list_presets() {
            self.get_preset(Some(name))?
                .validate()
                .map_err(|source| ConfigError::InvalidPreset {
                    name: name.to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Merges a configuration file into the store. Values from this file
    /// override values already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&mut self, path: &Path) -> Result<(), ConfigError> {
        tracing::debug!("loading config {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.merge(&content, &path.display().to_string())
    }

    /// Merges INI text into the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid INI.
    pub fn loads(&mut self, content: &str) -> Result<(), ConfigError> {
        self.merge(content, "<string>")
    }

    fn merge(&mut self, content: &str, origin: &str) -> Result<(), ConfigError> {
        let ini = Ini::load_from_str_opt(content, raw_values()).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            source: e,
        })?;

        for (section, properties) in ini.iter() {
            let target = match section {
                None | Some(DEFAULT_SECTION) => &mut self.defaults,
                Some(name) => self.sections.entry(name.to_string()).or_default(),
            };
            for (key, value) in properties.iter() {
                target.insert(key.to_lowercase(), value.to_string());
            }
        }
        Ok(())
    }

    /// Writes the store as INI text.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn dump<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.dumps().as_bytes())
    }

    /// Renders the store as INI text: the default section first (if it has
    /// any keys), then every preset section in order. Values are written
    /// verbatim.
    #[must_use]
    pub fn dumps(&self) -> String {
        let defaults = (!self.defaults.is_empty()).then_some((DEFAULT_SECTION, &self.defaults));
        let sections = self
            .sections
            .iter()
            .map(|(name, values)| (name.as_str(), values));

        let mut out = String::new();
        for (name, values) in defaults.into_iter().chain(sections) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push('[');
            out.push_str(name);
            out.push_str("]\n");
            for (key, value) in values {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }
}

/// Values are kept as written: no escape sequences, no quote stripping.
fn raw_values() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}
