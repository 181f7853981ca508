//! Generic option record.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;

use super::{OptionDef, OptionError, Value};

/// Static description of an option record type.
///
/// Implemented on a marker type; the schema is the same for every
/// [`OptionSet`] of that type.
pub trait Schema {
    /// Record type name used in error messages.
    const KIND: &'static str;

    /// Field descriptors, in their canonical order.
    fn options() -> &'static [OptionDef];
}

/// An instance of an option record.
///
/// Tracks which fields were explicitly set; every other field resolves to
/// its descriptor's default on access.
pub struct OptionSet<S> {
    values: HashMap<&'static str, Value>,
    schema: PhantomData<fn() -> S>,
}

impl<S: Schema> OptionSet<S> {
    /// Creates an instance with every field left at its default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            schema: PhantomData,
        }
    }

    /// Constructs an instance from named values, deserializing each one.
    ///
    /// All names are checked against the schema before any value is stored.
    ///
    /// # Errors
    ///
    /// - [`OptionError::UnknownField`] if a name is not part of the schema
    /// - [`OptionError::InvalidValue`] if a value fails to deserialize
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let pairs: Vec<(K, V)> = pairs.into_iter().collect();
        for (name, _) in &pairs {
            Self::option(name.as_ref())?;
        }

        let mut set = Self::new();
        for (name, raw) in pairs {
            set.set(name.as_ref(), raw)?;
        }
        Ok(set)
    }

    /// Constructs an instance from a flat string mapping.
    ///
    /// This is the inverse of [`to_dict`](Self::to_dict) for every field
    /// that holds a valid value.
    ///
    /// # Errors
    ///
    /// Same as [`from_pairs`](Self::from_pairs).
    pub fn from_dict<I, K, V>(data: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::from_pairs(
            data.into_iter()
                .map(|(name, raw)| (name, Value::from(raw.as_ref()))),
        )
    }

    /// Returns the schema's field descriptors.
    #[must_use]
    pub fn options() -> &'static [OptionDef] {
        S::options()
    }

    /// Returns the schema's field names, in order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        S::options().iter().map(|option| option.name)
    }

    /// Looks up a field descriptor by name.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnknownField`] if the name is not part of the schema.
    pub fn option(name: &str) -> Result<&'static OptionDef, OptionError> {
        S::options()
            .iter()
            .find(|option| option.name == name)
            .ok_or_else(|| OptionError::UnknownField {
                kind: S::KIND,
                field: name.to_string(),
            })
    }

    /// Returns every field's default value, in schema order.
    #[must_use]
    pub fn defaults() -> Vec<(&'static str, Option<Value>)> {
        S::options()
            .iter()
            .map(|option| (option.name, option.default_value()))
            .collect()
    }

    /// Returns the resolved value of a field: the explicitly set value if
    /// present, else the field's default.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnknownField`] if the name is not part of the schema.
    pub fn get(&self, name: &str) -> Result<Option<Cow<'_, Value>>, OptionError> {
        Self::option(name).map(|option| self.resolve(option))
    }

    /// Stores a raw value, deserializing it first if the field has a
    /// deserializer. Required-field checks happen only in [`validate`](Self::validate).
    ///
    /// # Errors
    ///
    /// - [`OptionError::UnknownField`] if the name is not part of the schema
    /// - [`OptionError::InvalidValue`] if the value fails to deserialize
    pub fn set(&mut self, name: &str, raw: impl Into<Value>) -> Result<(), OptionError> {
        let option = Self::option(name)?;
        let value = option.deserialize(raw.into())?;
        self.values.insert(option.name, value);
        Ok(())
    }

    /// Drops an explicitly set value, reverting the field to its default.
    ///
    /// Returns the previously set value, if any.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Returns true if the field holds an explicitly set value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns true if the field is declared required. Unknown names are not required.
    #[must_use]
    pub fn is_required(name: &str) -> bool {
        Self::option(name).is_ok_and(|option| option.required)
    }

    /// Checks that every required field resolves to a non-empty value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::MissingValues`] naming every offending field.
    pub fn validate(&self) -> Result<(), OptionError> {
        let missing: Vec<&'static str> = S::options()
            .iter()
            .filter(|option| option.required)
            .filter(|option| self.resolve(option).is_none_or(|value| value.is_empty()))
            .map(|option| option.name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(OptionError::MissingValues {
                kind: S::KIND,
                fields: missing,
            })
        }
    }

    /// Serializes every field with a non-empty resolved value.
    ///
    /// Empty fields are omitted, as are unset fields whose default is
    /// implied by the receiving side.
    #[must_use]
    pub fn to_dict(&self) -> IndexMap<&'static str, String> {
        S::options()
            .iter()
            .filter(|option| !option.implicit_default || self.is_set(option.name))
            .filter_map(|option| {
                let value = self.resolve(option)?;
                (!value.is_empty()).then(|| (option.name, option.serialize(&value)))
            })
            .collect()
    }

    /// Serializes only the explicitly set, non-empty fields.
    #[must_use]
    pub fn to_explicit_dict(&self) -> IndexMap<&'static str, String> {
        S::options()
            .iter()
            .filter_map(|option| {
                let value = self.values.get(option.name)?;
                (!value.is_empty()).then(|| (option.name, option.serialize(value)))
            })
            .collect()
    }

    /// Iterates over every field with its resolved value, in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<Cow<'_, Value>>)> + '_ {
        S::options()
            .iter()
            .map(|option| (option.name, self.resolve(option)))
    }

    /// Returns the resolved text of a field, if it is set to text or
    /// defaults to text.
    pub(crate) fn text(&self, name: &str) -> Option<String> {
        let value = self.get(name).ok()??;
        value.as_text().map(ToString::to_string)
    }

    fn resolve(&self, option: &OptionDef) -> Option<Cow<'_, Value>> {
        self.values
            .get(option.name)
            .map(Cow::Borrowed)
            .or_else(|| option.default_value().map(Cow::Owned))
    }
}

impl<S: Schema> Default for OptionSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for OptionSet<S> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            schema: PhantomData,
        }
    }
}

impl<S> PartialEq for OptionSet<S> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<S> Eq for OptionSet<S> {}

/// Shows only explicitly set fields, in schema order.
impl<S: Schema> fmt::Debug for OptionSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(S::KIND);
        for option in S::options() {
            if let Some(value) = self.values.get(option.name) {
                out.field(option.name, value);
            }
        }
        out.finish()
    }
}
