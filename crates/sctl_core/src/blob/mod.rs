mod bytes;
mod decode;
mod encode;
mod error;
mod property;
mod scan;
mod value;

/// Decode entry points and diagnostics.
pub use decode::{DecodeReport, DecodeWarning, decode, decode_key};
/// In-place and copy-on-write encode entry points.
pub use encode::{encode, encode_copy};
/// Error and result aliases.
pub use error::{BlobError, Result, WriteFailure};
/// Type table.
pub use property::PropertyType;
/// Occurrence scanning and layout constants.
pub use scan::{KEY_PADDING, Occurrence, VALUE_PADDING, find_occurrences};
/// Decoded value types.
pub use value::{PropertyEntry, PropertySet, PropertyValue, Value};
