use crate::blob::{BlobError, Occurrence, PropertyValue, Result, find_occurrences};

/// Overwrite the value bytes of `key` in place and return the same buffer.
///
/// A [`PropertyValue::Single`] requires exactly one occurrence; an
/// [`PropertyValue::Array`] must match the occurrence count. Both checks run
/// before any byte is written. Writes are fail-fast: when element `i` cannot be
/// written, elements `0..i` stay written. Use [`encode_copy`] when the input
/// must survive a failed write untouched.
pub fn encode<'a>(blob: &'a mut [u8], key: &str, value: &PropertyValue) -> Result<&'a mut [u8]> {
	let occurrences = find_occurrences(blob, key);
	if occurrences.is_empty() {
		return Err(BlobError::KeyNotFound { key: key.to_owned() });
	}

	match value {
		PropertyValue::Single(_) if occurrences.len() != 1 => {
			return Err(BlobError::AmbiguousKey {
				key: key.to_owned(),
				occurrences: occurrences.len(),
			});
		}
		PropertyValue::Array(items) if items.len() != occurrences.len() => {
			return Err(BlobError::LengthMismatch {
				key: key.to_owned(),
				occurrences: occurrences.len(),
				values: items.len(),
			});
		}
		_ => {}
	}

	write_occurrences(blob, key, &occurrences, value)?;
	Ok(blob)
}

/// Copy-on-write variant of [`encode`]: the input is never modified and the
/// rewritten copy is returned only when every element was written.
pub fn encode_copy(blob: &[u8], key: &str, value: &PropertyValue) -> Result<Vec<u8>> {
	let mut out = blob.to_vec();
	encode(&mut out, key, value)?;
	Ok(out)
}

fn write_occurrences(blob: &mut [u8], key: &str, occurrences: &[Occurrence], value: &PropertyValue) -> Result<()> {
	for (index, (occ, item)) in occurrences.iter().zip(value.values()).enumerate() {
		occ.property_type
			.write(blob, occ.value_offset, *item)
			.map_err(|reason| BlobError::EncodeWrite {
				key: key.to_owned(),
				index,
				reason,
			})?;
		tracing::trace!(key, index, offset = occ.value_offset, value = %item, "wrote property value");
	}

	Ok(())
}
