use crate::blob::bytes::{read_array, write_array};
use crate::blob::{BlobError, Result, Value, WriteFailure};

/// Fixed-width scalar property kinds recognised inside blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
	/// Unsigned byte.
	Byte,
	/// One-byte boolean.
	Bool,
	/// Signed 8-bit integer.
	Int8,
	/// Signed 16-bit integer.
	Int16,
	/// Signed 32-bit integer.
	Int32,
	/// Signed 64-bit integer.
	Int64,
	/// Unsigned 8-bit integer.
	UInt8,
	/// Unsigned 16-bit integer.
	UInt16,
	/// Unsigned 32-bit integer.
	UInt32,
	/// Unsigned 64-bit integer.
	UInt64,
	/// IEEE-754 single precision float.
	Float,
	/// IEEE-754 double precision float.
	Double,
}

/// Embedded type names and the tag each one resolves to.
const TYPE_NAMES: &[(&str, PropertyType)] = &[
	("ByteProperty", PropertyType::Byte),
	("BoolProperty", PropertyType::Bool),
	("Int8Property", PropertyType::Int8),
	("UInt8Property", PropertyType::UInt8),
	("Int16Property", PropertyType::Int16),
	("UInt16Property", PropertyType::UInt16),
	("IntProperty", PropertyType::Int32),
	("Int32Property", PropertyType::Int32),
	("UInt32Property", PropertyType::UInt32),
	("FloatProperty", PropertyType::Float),
	("Int64Property", PropertyType::Int64),
	("UInt64Property", PropertyType::UInt64),
	("DoubleProperty", PropertyType::Double),
];

impl PropertyType {
	/// Every tag, in declaration order.
	pub const ALL: [Self; 12] = [
		Self::Byte,
		Self::Bool,
		Self::Int8,
		Self::Int16,
		Self::Int32,
		Self::Int64,
		Self::UInt8,
		Self::UInt16,
		Self::UInt32,
		Self::UInt64,
		Self::Float,
		Self::Double,
	];

	/// Resolve an embedded type name. Matching is exact and case-sensitive.
	pub fn from_type_name(name: &str) -> Option<Self> {
		TYPE_NAMES.iter().find(|(candidate, _)| *candidate == name).map(|(_, tag)| *tag)
	}

	/// Canonical embedded type name.
	pub fn type_name(self) -> &'static str {
		match self {
			Self::Byte => "ByteProperty",
			Self::Bool => "BoolProperty",
			Self::Int8 => "Int8Property",
			Self::Int16 => "Int16Property",
			Self::Int32 => "Int32Property",
			Self::Int64 => "Int64Property",
			Self::UInt8 => "UInt8Property",
			Self::UInt16 => "UInt16Property",
			Self::UInt32 => "UInt32Property",
			Self::UInt64 => "UInt64Property",
			Self::Float => "FloatProperty",
			Self::Double => "DoubleProperty",
		}
	}

	/// Value width in bytes.
	pub fn width(self) -> usize {
		match self {
			Self::Byte | Self::Bool | Self::Int8 | Self::UInt8 => 1,
			Self::Int16 | Self::UInt16 => 2,
			Self::Int32 | Self::UInt32 | Self::Float => 4,
			Self::Int64 | Self::UInt64 | Self::Double => 8,
		}
	}

	/// Read a little-endian value at `offset`; `None` if the span leaves the buffer.
	pub fn read(self, bytes: &[u8], offset: usize) -> Option<Value> {
		Some(match self {
			Self::Byte | Self::UInt8 => Value::U8(u8::from_le_bytes(read_array(bytes, offset)?)),
			Self::Bool => {
				let [byte] = read_array::<1>(bytes, offset)?;
				if byte > 1 {
					tracing::debug!(offset, byte, "non-canonical bool byte read as true");
				}
				Value::Bool(byte != 0)
			}
			Self::Int8 => Value::I8(i8::from_le_bytes(read_array(bytes, offset)?)),
			Self::Int16 => Value::I16(i16::from_le_bytes(read_array(bytes, offset)?)),
			Self::Int32 => Value::I32(i32::from_le_bytes(read_array(bytes, offset)?)),
			Self::Int64 => Value::I64(i64::from_le_bytes(read_array(bytes, offset)?)),
			Self::UInt16 => Value::U16(u16::from_le_bytes(read_array(bytes, offset)?)),
			Self::UInt32 => Value::U32(u32::from_le_bytes(read_array(bytes, offset)?)),
			Self::UInt64 => Value::U64(u64::from_le_bytes(read_array(bytes, offset)?)),
			Self::Float => Value::F32(f32::from_le_bytes(read_array(bytes, offset)?)),
			Self::Double => Value::F64(f64::from_le_bytes(read_array(bytes, offset)?)),
		})
	}

	/// Convert `value` to this tag and overwrite the bytes at `offset`.
	pub fn write(self, bytes: &mut [u8], offset: usize, value: Value) -> std::result::Result<(), WriteFailure> {
		let out_of_range = || WriteFailure::OutOfRange { value, property_type: self };
		match self.coerce(value).ok_or_else(out_of_range)? {
			Value::Bool(v) => write_array(bytes, offset, [u8::from(v)]),
			Value::U8(v) => write_array(bytes, offset, v.to_le_bytes()),
			Value::I8(v) => write_array(bytes, offset, v.to_le_bytes()),
			Value::I16(v) => write_array(bytes, offset, v.to_le_bytes()),
			Value::I32(v) => write_array(bytes, offset, v.to_le_bytes()),
			Value::I64(v) => write_array(bytes, offset, v.to_le_bytes()),
			Value::U16(v) => write_array(bytes, offset, v.to_le_bytes()),
			Value::U32(v) => write_array(bytes, offset, v.to_le_bytes()),
			Value::U64(v) => write_array(bytes, offset, v.to_le_bytes()),
			Value::F32(v) => write_array(bytes, offset, v.to_le_bytes()),
			Value::F64(v) => write_array(bytes, offset, v.to_le_bytes()),
		}
	}

	/// Convert `value` into the scalar variant stored by this tag.
	///
	/// Returns `None` when the magnitude does not fit or a fractional float targets an integer tag.
	pub fn coerce(self, value: Value) -> Option<Value> {
		match self {
			Self::Bool => match integral(value)? {
				0 => Some(Value::Bool(false)),
				1 => Some(Value::Bool(true)),
				_ => None,
			},
			Self::Byte | Self::UInt8 => u8::try_from(integral(value)?).ok().map(Value::U8),
			Self::Int8 => i8::try_from(integral(value)?).ok().map(Value::I8),
			Self::Int16 => i16::try_from(integral(value)?).ok().map(Value::I16),
			Self::Int32 => i32::try_from(integral(value)?).ok().map(Value::I32),
			Self::Int64 => i64::try_from(integral(value)?).ok().map(Value::I64),
			Self::UInt16 => u16::try_from(integral(value)?).ok().map(Value::U16),
			Self::UInt32 => u32::try_from(integral(value)?).ok().map(Value::U32),
			Self::UInt64 => u64::try_from(integral(value)?).ok().map(Value::U64),
			Self::Float => match value {
				Value::F32(v) => Some(Value::F32(v)),
				Value::F64(v) => {
					let narrowed = v as f32;
					if v.is_finite() && narrowed.is_infinite() {
						return None;
					}
					Some(Value::F32(narrowed))
				}
				other => Some(Value::F32(other.as_f64() as f32)),
			},
			Self::Double => Some(Value::F64(value.as_f64())),
		}
	}

	/// Parse a textual literal as this tag.
	pub fn parse_value(self, literal: &str) -> Result<Value> {
		let text = literal.trim();
		let parsed = match self {
			Self::Bool => match text {
				"true" | "1" => Some(Value::Bool(true)),
				"false" | "0" => Some(Value::Bool(false)),
				_ => None,
			},
			Self::Byte | Self::UInt8 => text.parse().ok().map(Value::U8),
			Self::Int8 => text.parse().ok().map(Value::I8),
			Self::Int16 => text.parse().ok().map(Value::I16),
			Self::Int32 => text.parse().ok().map(Value::I32),
			Self::Int64 => text.parse().ok().map(Value::I64),
			Self::UInt16 => text.parse().ok().map(Value::U16),
			Self::UInt32 => text.parse().ok().map(Value::U32),
			Self::UInt64 => text.parse().ok().map(Value::U64),
			Self::Float => text.parse().ok().map(Value::F32),
			Self::Double => text.parse().ok().map(Value::F64),
		};

		parsed.ok_or_else(|| BlobError::InvalidValueLiteral {
			literal: literal.to_owned(),
			property_type: self,
		})
	}
}

/// Integer view of a value; floats qualify only when finite and whole.
fn integral(value: Value) -> Option<i128> {
	match value {
		Value::F32(v) => integral(Value::F64(f64::from(v))),
		Value::F64(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i128),
		Value::F64(_) => None,
		other => other.as_i128(),
	}
}
