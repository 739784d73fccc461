use crate::blob::PropertyType;
use crate::blob::bytes::{find_bytes, read_cstring_bytes};

/// Filler bytes between the end of a key and its embedded type name.
pub const KEY_PADDING: usize = 5;
/// Filler bytes between the end of a type name and the value, counting its terminator.
pub const VALUE_PADDING: usize = 10;

/// One located instance of a key with a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
	/// Resolved property type.
	pub property_type: PropertyType,
	/// Byte offset where the key match starts.
	pub key_offset: usize,
	/// Byte offset where the value starts.
	pub value_offset: usize,
}

impl Occurrence {
	/// Exclusive end offset of the value span.
	pub fn value_end(&self) -> usize {
		self.value_offset + self.property_type.width()
	}
}

/// Locate every decodable occurrence of `key`, in byte-scan order.
///
/// Matches whose embedded type name is unknown are skipped. A type name with
/// no terminator before the end of the blob ends the scan for this key.
pub fn find_occurrences(blob: &[u8], key: &str) -> Vec<Occurrence> {
	let needle = key.as_bytes();
	let mut out = Vec::new();
	let mut cursor = 0_usize;

	while let Some(key_offset) = find_bytes(blob, needle, cursor) {
		let type_offset = key_offset + needle.len() + KEY_PADDING;
		let Some(type_name) = read_cstring_bytes(blob, type_offset) else {
			tracing::debug!(key, key_offset, type_offset, "unterminated type name, stopping scan");
			break;
		};

		let after_type = type_offset + type_name.len() + VALUE_PADDING;
		let property_type = std::str::from_utf8(type_name).ok().and_then(PropertyType::from_type_name);
		let Some(property_type) = property_type else {
			tracing::trace!(key, key_offset, type_name = %String::from_utf8_lossy(type_name), "skipping unsupported type");
			cursor = after_type;
			continue;
		};

		let occurrence = Occurrence {
			property_type,
			key_offset,
			value_offset: after_type,
		};
		cursor = occurrence.value_end();
		out.push(occurrence);
	}

	out
}

#[cfg(test)]
mod tests;
