//! Shared test helpers for workspace crates.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Return a fresh, not-yet-existing file path under `<target>/sctl_testkit`.
pub fn scratch_path(name: &str) -> PathBuf {
	let dir = target_dir().join("sctl_testkit");
	fs::create_dir_all(&dir).expect("scratch directory is creatable");
	let n = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
	dir.join(format!("{}-{n}-{name}", std::process::id()))
}

/// Write `bytes` to a fresh scratch file and return its path.
pub fn write_scratch_blob(name: &str, bytes: &[u8]) -> PathBuf {
	let path = scratch_path(name);
	fs::write(&path, bytes).expect("scratch blob is writable");
	path
}

/// Builds property blobs in the serialized layout the codec scans:
/// key, 5 filler bytes, NUL-terminated type name, 9 more filler bytes, value.
///
/// Filler mirrors what the game writes: the key filler is the key terminator
/// plus the type-name length, the value filler is the type terminator plus
/// the value size, the array index, and a property-guid flag.
#[derive(Debug, Default, Clone)]
pub struct BlobBuilder {
	bytes: Vec<u8>,
	array_index: HashMap<String, u32>,
}

impl BlobBuilder {
	/// Start an empty blob.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append raw bytes verbatim.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Append one property record with explicit value bytes.
	pub fn property(mut self, key: &str, type_name: &str, value: &[u8]) -> Self {
		let index = self.array_index.entry(key.to_owned()).or_insert(0);
		let array_index = *index;
		*index += 1;

		self.bytes.extend_from_slice(key.as_bytes());
		self.bytes.push(0);
		self.bytes.extend_from_slice(&(type_name.len() as u32 + 1).to_le_bytes());
		self.bytes.extend_from_slice(type_name.as_bytes());
		self.bytes.push(0);
		self.bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
		self.bytes.extend_from_slice(&array_index.to_le_bytes());
		self.bytes.push(0);
		self.bytes.extend_from_slice(value);
		self
	}

	/// Append a `FloatProperty`.
	pub fn float(self, key: &str, value: f32) -> Self {
		self.property(key, "FloatProperty", &value.to_le_bytes())
	}

	/// Append a `DoubleProperty`.
	pub fn double(self, key: &str, value: f64) -> Self {
		self.property(key, "DoubleProperty", &value.to_le_bytes())
	}

	/// Append an `IntProperty`.
	pub fn int(self, key: &str, value: i32) -> Self {
		self.property(key, "IntProperty", &value.to_le_bytes())
	}

	/// Append an `Int64Property`.
	pub fn int64(self, key: &str, value: i64) -> Self {
		self.property(key, "Int64Property", &value.to_le_bytes())
	}

	/// Append a `UInt64Property`.
	pub fn uint64(self, key: &str, value: u64) -> Self {
		self.property(key, "UInt64Property", &value.to_le_bytes())
	}

	/// Append a `BoolProperty`.
	pub fn bool(self, key: &str, value: bool) -> Self {
		self.property(key, "BoolProperty", &[u8::from(value)])
	}

	/// Return the finished blob.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}
