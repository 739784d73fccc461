use thiserror::Error;

use crate::blob::{PropertyType, Value};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BlobError>;

/// Errors produced while decoding or rewriting property blobs.
#[derive(Debug, Error)]
pub enum BlobError {
	/// Call arguments were malformed before any scanning happened.
	#[error("invalid input: {reason}")]
	InvalidInput {
		/// What was wrong with the arguments.
		reason: String,
	},
	/// Encode target key has no decodable occurrence in the blob.
	#[error("cannot update: key {key:?} or its type was not found")]
	KeyNotFound {
		/// Requested key name.
		key: String,
	},
	/// A single value was supplied for a key that occurs several times.
	#[error("key {key:?} occurs {occurrences} times but a single value was supplied")]
	AmbiguousKey {
		/// Requested key name.
		key: String,
		/// Number of occurrences found by the scan.
		occurrences: usize,
	},
	/// Supplied value sequence does not match the occurrence count.
	#[error("key {key:?} occurs {occurrences} times but {values} values were supplied")]
	LengthMismatch {
		/// Requested key name.
		key: String,
		/// Number of occurrences found by the scan.
		occurrences: usize,
		/// Number of values supplied by the caller.
		values: usize,
	},
	/// Writing one element failed; elements before `index` stay written.
	#[error("failed to write key {key:?} at occurrence {index}: {reason}")]
	EncodeWrite {
		/// Requested key name.
		key: String,
		/// Zero-based occurrence index that failed.
		index: usize,
		/// Why the write could not be performed.
		reason: WriteFailure,
	},
	/// Textual literal could not be parsed as the target property type.
	#[error("invalid {} literal: {literal:?}", .property_type.type_name())]
	InvalidValueLiteral {
		/// User-provided literal.
		literal: String,
		/// Property type the literal was parsed for.
		property_type: PropertyType,
	},
}

/// Reason a single fixed-width write was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WriteFailure {
	/// Value span would run past the end of the blob.
	#[error("value span at offset {offset} with width {width} exceeds blob length {len}")]
	OutOfBounds {
		/// Value start offset.
		offset: usize,
		/// Bytes required by the property type.
		width: usize,
		/// Blob length.
		len: usize,
	},
	/// Value cannot be represented by the target property type.
	#[error("value {value} is not representable as {}", .property_type.type_name())]
	OutOfRange {
		/// Rejected value.
		value: Value,
		/// Target property type.
		property_type: PropertyType,
	},
}
