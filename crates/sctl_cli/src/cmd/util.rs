use std::fs;
use std::path::Path;

use sctl::blob::{PropertyValue, Value};

use crate::cmd::DynError;

/// Read a whole blob file into memory.
pub(crate) fn read_blob(path: &Path) -> Result<Vec<u8>, DynError> {
	fs::read(path).map_err(|err| format!("failed to read {}: {err}", path.display()).into())
}

/// Write a blob file, replacing any previous content.
pub(crate) fn write_blob(path: &Path, bytes: &[u8]) -> Result<(), DynError> {
	fs::write(path, bytes).map_err(|err| format!("failed to write {}: {err}", path.display()).into())
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}

/// Convert a scalar to JSON, keeping 64-bit integers exact.
pub(crate) fn value_json(value: Value) -> serde_json::Value {
	match value {
		Value::Bool(v) => serde_json::Value::Bool(v),
		Value::U8(v) => v.into(),
		Value::I8(v) => v.into(),
		Value::I16(v) => v.into(),
		Value::I32(v) => v.into(),
		Value::I64(v) => v.into(),
		Value::U16(v) => v.into(),
		Value::U32(v) => v.into(),
		Value::U64(v) => v.into(),
		// Shortest f32 text keeps `0.1` from widening to `0.10000000149011612`.
		Value::F32(v) => float_json(v.to_string().parse().unwrap_or(f64::from(v))),
		Value::F64(v) => float_json(v),
	}
}

/// Convert a decoded property to JSON: a scalar, or an array for repeated keys.
pub(crate) fn property_json(value: &PropertyValue) -> serde_json::Value {
	match value {
		PropertyValue::Single(item) => value_json(*item),
		PropertyValue::Array(items) => serde_json::Value::Array(items.iter().copied().map(value_json).collect()),
	}
}

/// Round a float for human-readable output.
pub(crate) fn format_float(value: f64, decimals: usize) -> String {
	format!("{value:.decimals$}")
}

fn float_json(value: f64) -> serde_json::Value {
	serde_json::Number::from_f64(value).map_or(serde_json::Value::Null, serde_json::Value::Number)
}
