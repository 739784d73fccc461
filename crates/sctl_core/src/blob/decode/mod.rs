use std::fmt;

use crate::blob::{BlobError, PropertySet, PropertyValue, Result, find_occurrences};

/// Non-fatal diagnostic produced while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
	/// Key was not found, or every match had an unsupported type.
	NoOccurrences {
		/// Requested key name.
		key: String,
	},
	/// Occurrence value span runs past the end of the blob.
	ValueOutOfBounds {
		/// Requested key name.
		key: String,
		/// Zero-based occurrence index.
		index: usize,
		/// Value start offset.
		offset: usize,
		/// Bytes required by the property type.
		width: usize,
		/// Blob length.
		len: usize,
	},
}

impl DecodeWarning {
	/// Key the warning refers to.
	pub fn key(&self) -> &str {
		match self {
			Self::NoOccurrences { key } | Self::ValueOutOfBounds { key, .. } => key,
		}
	}
}

impl fmt::Display for DecodeWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoOccurrences { key } => write!(f, "no values found for key {key:?} (missing or unsupported type)"),
			Self::ValueOutOfBounds {
				key,
				index,
				offset,
				width,
				len,
			} => write!(f, "value {index} of key {key:?} at offset {offset} needs {width} bytes but blob length is {len}"),
		}
	}
}

/// Decoded properties plus the warnings collected along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeReport {
	/// Successfully decoded keys, in request order.
	pub properties: PropertySet,
	/// Diagnostics in the order they were produced.
	pub warnings: Vec<DecodeWarning>,
}

/// Decode each requested key from `blob`.
///
/// Missing keys and unreadable occurrences become warnings; only malformed
/// arguments fail the call.
pub fn decode<K: AsRef<str>>(blob: &[u8], keys: &[K]) -> Result<DecodeReport> {
	if let Some(pos) = keys.iter().position(|key| key.as_ref().is_empty()) {
		return Err(BlobError::InvalidInput {
			reason: format!("key at position {pos} is empty"),
		});
	}

	let mut report = DecodeReport::default();
	for key in keys {
		let key = key.as_ref();
		let (value, warnings) = decode_key(blob, key);
		report.warnings.extend(warnings);
		if let Some(value) = value {
			report.properties.insert(key, value);
		}
	}

	tracing::debug!(requested = keys.len(), decoded = report.properties.len(), warnings = report.warnings.len(), "decoded blob");
	Ok(report)
}

/// Decode one key: a bare scalar for one readable occurrence, a sequence for several.
pub fn decode_key(blob: &[u8], key: &str) -> (Option<PropertyValue>, Vec<DecodeWarning>) {
	let occurrences = find_occurrences(blob, key);
	if occurrences.is_empty() {
		return (None, vec![DecodeWarning::NoOccurrences { key: key.to_owned() }]);
	}

	let mut warnings = Vec::new();
	let mut values = Vec::with_capacity(occurrences.len());
	for (index, occ) in occurrences.iter().enumerate() {
		match occ.property_type.read(blob, occ.value_offset) {
			Some(value) => values.push(value),
			None => warnings.push(DecodeWarning::ValueOutOfBounds {
				key: key.to_owned(),
				index,
				offset: occ.value_offset,
				width: occ.property_type.width(),
				len: blob.len(),
			}),
		}
	}

	let value = match values.len() {
		0 => None,
		1 => values.pop().map(PropertyValue::Single),
		_ => Some(PropertyValue::Array(values)),
	};
	(value, warnings)
}

#[cfg(test)]
mod tests;
