//! Field descriptors.

use super::{OptionError, Value, convert};

/// Produces a field's default value. Evaluated on every access.
pub type DefaultFn = fn() -> Option<Value>;

/// Maps an in-memory value to its flat string form.
pub type Serializer = fn(&Value) -> String;

/// Maps a raw value to its in-memory form for the named field.
pub type Deserializer = fn(&'static str, Value) -> Result<Value, OptionError>;

/// Descriptor for a single named, typed field of an option record.
///
/// Descriptors are static and shared by all instances of a record type;
/// they never hold per-instance values.
///
/// Built with `const` builder methods so schemas can live in `static` arrays:
///
/// ```
/// use pushover::options::{OptionDef, Value, convert};
///
/// fn greeting() -> Option<Value> {
///     Some(Value::from("hello"))
/// }
///
/// let def = OptionDef::new("greeting")
///     .with_default(greeting)
///     .optional()
///     .with_deserializer(convert::text);
///
/// assert_eq!(def.default_value(), Some(Value::from("hello")));
/// assert!(!def.required);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OptionDef {
    /// Field name, unique within its schema
    pub name: &'static str,

    /// Default value producer
    pub default: DefaultFn,

    /// Whether the owning record is invalid when this field has no value
    pub required: bool,

    /// Whether the receiving side assumes the default when the field is
    /// absent. Unset fields with an implicit default are left out of
    /// serialized output.
    pub implicit_default: bool,

    /// In-memory value to flat string
    pub serialize: Serializer,

    /// Raw value to in-memory value; `None` stores raw values verbatim
    pub deserialize: Option<Deserializer>,
}

/// Default producer for fields without a default.
const fn no_default() -> Option<Value> {
    None
}

impl OptionDef {
    /// Creates a required field with no default, the plain serializer and
    /// no deserializer.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: no_default,
            required: true,
            implicit_default: false,
            serialize: convert::plain,
            deserialize: None,
        }
    }

    /// Sets the default value producer.
    #[must_use]
    pub const fn with_default(mut self, default: DefaultFn) -> Self {
        self.default = default;
        self
    }

    /// Marks the field as optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Marks the default as implied by the receiving side.
    #[must_use]
    pub const fn implicit_default(mut self) -> Self {
        self.implicit_default = true;
        self
    }

    /// Sets the serializer.
    #[must_use]
    pub const fn with_serializer(mut self, serialize: Serializer) -> Self {
        self.serialize = serialize;
        self
    }

    /// Sets the deserializer.
    #[must_use]
    pub const fn with_deserializer(mut self, deserialize: Deserializer) -> Self {
        self.deserialize = Some(deserialize);
        self
    }

    /// Evaluates the default value producer.
    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        (self.default)()
    }

    /// Converts a raw value to its in-memory form.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::InvalidValue`] if the deserializer rejects the value.
    pub fn deserialize(&self, raw: Value) -> Result<Value, OptionError> {
        match self.deserialize {
            Some(deserialize) => deserialize(self.name, raw),
            None => Ok(raw),
        }
    }

    /// Converts an in-memory value to its flat string form.
    #[must_use]
    pub fn serialize(&self, value: &Value) -> String {
        (self.serialize)(value)
    }
}
