use std::fmt;

/// Scalar decoded from, or written to, one property occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
	/// Boolean flag (`BoolProperty`).
	Bool(bool),
	/// Unsigned 8-bit integer (`ByteProperty`, `UInt8Property`).
	U8(u8),
	/// Signed 8-bit integer.
	I8(i8),
	/// Signed 16-bit integer.
	I16(i16),
	/// Signed 32-bit integer.
	I32(i32),
	/// Signed 64-bit integer.
	I64(i64),
	/// Unsigned 16-bit integer.
	U16(u16),
	/// Unsigned 32-bit integer.
	U32(u32),
	/// Unsigned 64-bit integer.
	U64(u64),
	/// 32-bit float.
	F32(f32),
	/// 64-bit float.
	F64(f64),
}

impl Value {
	/// Widen any integer-like value to `i128`; `None` for floats.
	pub fn as_i128(self) -> Option<i128> {
		match self {
			Self::Bool(v) => Some(i128::from(v)),
			Self::U8(v) => Some(i128::from(v)),
			Self::I8(v) => Some(i128::from(v)),
			Self::I16(v) => Some(i128::from(v)),
			Self::I32(v) => Some(i128::from(v)),
			Self::I64(v) => Some(i128::from(v)),
			Self::U16(v) => Some(i128::from(v)),
			Self::U32(v) => Some(i128::from(v)),
			Self::U64(v) => Some(i128::from(v)),
			Self::F32(_) | Self::F64(_) => None,
		}
	}

	/// Numeric value as `f64`. 64-bit integers above 2^53 round here.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::F32(v) => f64::from(v),
			Self::F64(v) => v,
			Self::I64(v) => v as f64,
			Self::U64(v) => v as f64,
			other => other.as_i128().unwrap_or_default() as f64,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(v) => write!(f, "{v}"),
			Self::U8(v) => write!(f, "{v}"),
			Self::I8(v) => write!(f, "{v}"),
			Self::I16(v) => write!(f, "{v}"),
			Self::I32(v) => write!(f, "{v}"),
			Self::I64(v) => write!(f, "{v}"),
			Self::U16(v) => write!(f, "{v}"),
			Self::U32(v) => write!(f, "{v}"),
			Self::U64(v) => write!(f, "{v}"),
			Self::F32(v) => write!(f, "{v}"),
			Self::F64(v) => write!(f, "{v}"),
		}
	}
}

macro_rules! impl_from_scalar {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

impl_from_scalar! {
	bool => Bool,
	u8 => U8,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	f32 => F32,
	f64 => F64,
}

/// Decoded value of one key: a bare scalar for a single occurrence, a sequence otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	/// Key occurred exactly once.
	Single(Value),
	/// Key occurred several times, in byte-scan order.
	Array(Vec<Value>),
}

impl PropertyValue {
	/// Number of scalars carried.
	pub fn len(&self) -> usize {
		match self {
			Self::Single(_) => 1,
			Self::Array(items) => items.len(),
		}
	}

	/// Return `true` for an empty sequence.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Return the single scalar, if this is not a sequence.
	pub fn as_single(&self) -> Option<Value> {
		match self {
			Self::Single(value) => Some(*value),
			Self::Array(_) => None,
		}
	}

	/// Borrow the carried scalars as a slice.
	pub fn values(&self) -> &[Value] {
		match self {
			Self::Single(value) => std::slice::from_ref(value),
			Self::Array(items) => items,
		}
	}
}

impl From<Value> for PropertyValue {
	fn from(value: Value) -> Self {
		Self::Single(value)
	}
}

impl From<Vec<Value>> for PropertyValue {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl fmt::Display for PropertyValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Single(value) => write!(f, "{value}"),
			Self::Array(items) => {
				f.write_str("[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
		}
	}
}

/// Named decoded property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
	/// Requested key name.
	pub name: Box<str>,
	/// Decoded payload.
	pub value: PropertyValue,
}

/// Decoded properties in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
	/// Entries in the order their keys were requested.
	pub entries: Vec<PropertyEntry>,
}

impl PropertySet {
	/// Look up a decoded key.
	pub fn get(&self, name: &str) -> Option<&PropertyValue> {
		self.entries.iter().find(|entry| &*entry.name == name).map(|entry| &entry.value)
	}

	/// Insert or replace an entry, keeping the first insertion position.
	pub fn insert(&mut self, name: &str, value: PropertyValue) {
		if let Some(entry) = self.entries.iter_mut().find(|entry| &*entry.name == name) {
			entry.value = value;
			return;
		}
		self.entries.push(PropertyEntry { name: name.into(), value });
	}

	/// Number of decoded keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Return `true` when no key decoded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in request order.
	pub fn iter(&self) -> std::slice::Iter<'_, PropertyEntry> {
		self.entries.iter()
	}
}
