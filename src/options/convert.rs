//! Stock serializers and deserializers for [`OptionDef`](super::OptionDef).

use super::{OptionError, Value};

/// Serializes any value to its flat string form.
#[must_use]
pub fn plain(value: &Value) -> String {
    value.to_string()
}

/// Deserializes any value to text.
///
/// # Errors
///
/// Never fails; the signature matches [`Deserializer`](super::Deserializer).
pub fn text(_field: &'static str, raw: Value) -> Result<Value, OptionError> {
    match raw {
        Value::Text(_) => Ok(raw),
        other => Ok(Value::Text(other.to_string())),
    }
}
