use crate::blob::WriteFailure;

/// Find the first occurrence of `needle` in `haystack` at or after `from`.
pub fn find_bytes(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
	if needle.is_empty() || from >= haystack.len() {
		return None;
	}

	haystack[from..].windows(needle.len()).position(|window| window == needle).map(|rel| from + rel)
}

/// Read a zero-terminated byte string at `offset`, without the terminator.
///
/// Returns `None` when `offset` is past the end or no terminator follows it.
pub fn read_cstring_bytes(bytes: &[u8], offset: usize) -> Option<&[u8]> {
	let rem = bytes.get(offset..)?;
	let end = rem.iter().position(|byte| *byte == 0)?;
	Some(&rem[..end])
}

/// Read exactly `N` bytes at `offset`.
pub fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> Option<[u8; N]> {
	let end = offset.checked_add(N)?;
	let raw = bytes.get(offset..end)?;
	let mut out = [0_u8; N];
	out.copy_from_slice(raw);
	Some(out)
}

/// Overwrite exactly `N` bytes at `offset`.
pub fn write_array<const N: usize>(bytes: &mut [u8], offset: usize, raw: [u8; N]) -> Result<(), WriteFailure> {
	let len = bytes.len();
	let dst = offset
		.checked_add(N)
		.and_then(|end| bytes.get_mut(offset..end))
		.ok_or(WriteFailure::OutOfBounds { offset, width: N, len })?;
	dst.copy_from_slice(&raw);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::{find_bytes, read_array, read_cstring_bytes, write_array};
	use crate::blob::WriteFailure;

	#[test]
	fn find_bytes_honours_start_offset() {
		let hay = b"abcXYZabcXYZ";
		assert_eq!(find_bytes(hay, b"XYZ", 0), Some(3));
		assert_eq!(find_bytes(hay, b"XYZ", 4), Some(9));
		assert_eq!(find_bytes(hay, b"XYZ", 10), None);
		assert_eq!(find_bytes(hay, b"", 0), None);
	}

	#[test]
	fn cstring_requires_terminator() {
		assert_eq!(read_cstring_bytes(b"abc\0def", 0), Some(&b"abc"[..]));
		assert_eq!(read_cstring_bytes(b"abc\0def", 4), None);
		assert_eq!(read_cstring_bytes(b"abc\0", 3), Some(&b""[..]));
		assert_eq!(read_cstring_bytes(b"abc", 9), None);
	}

	#[test]
	fn fixed_width_reads_and_writes_are_bounded() {
		let mut bytes = [0_u8; 6];
		write_array(&mut bytes, 2, 0x1122_3344_u32.to_le_bytes()).expect("in-bounds write");
		assert_eq!(read_array::<4>(&bytes, 2), Some(0x1122_3344_u32.to_le_bytes()));
		assert_eq!(read_array::<4>(&bytes, 3), None);

		let err = write_array(&mut bytes, 4, [0_u8; 4]).expect_err("write past end should fail");
		assert_eq!(err, WriteFailure::OutOfBounds { offset: 4, width: 4, len: 6 });
		assert_eq!(bytes, [0, 0, 0x44, 0x33, 0x22, 0x11]);
	}
}
