//! Schema-driven option records.
//!
//! An option record is a fixed, ordered list of field descriptors
//! ([`OptionDef`]) shared by every instance of a record type, plus a
//! per-instance map of the values that were explicitly set. Each descriptor
//! carries its own default producer, required flag, serializer and optional
//! deserializer, so the generic operations on [`OptionSet`] (get, set,
//! validate, `to_dict`, `from_dict`) work the same for every record.
//!
//! Record types are declared by implementing [`Schema`] on a marker type:
//!
//! ```
//! use pushover::options::{OptionDef, OptionSet, Schema, convert};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
//! struct Greeting;
//!
//! static OPTIONS: [OptionDef; 2] = [
//!     OptionDef::new("name").with_deserializer(convert::text),
//!     OptionDef::new("suffix").optional(),
//! ];
//!
//! impl Schema for Greeting {
//!     const KIND: &'static str = "Greeting";
//!
//!     fn options() -> &'static [OptionDef] {
//!         &OPTIONS
//!     }
//! }
//!
//! let greeting = OptionSet::<Greeting>::from_dict([("name", "world")]).unwrap();
//! assert!(greeting.validate().is_ok());
//! ```

pub mod convert;
mod error;
mod option;
mod set;
mod value;


pub use error::OptionError;
pub use option::{DefaultFn, Deserializer, OptionDef, Serializer};
pub use set::{OptionSet, Schema};
pub use value::Value;
