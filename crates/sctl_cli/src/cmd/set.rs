use std::path::PathBuf;

use sctl::blob::{BlobError, PropertyValue, Value, decode_key, encode, encode_copy, find_occurrences};

use crate::cmd::CmdResult;
use crate::cmd::util::{emit_json, property_json, read_blob, write_blob};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	pub key: String,
	/// One literal writes a single occurrence; several write a repeated key in order.
	#[arg(required = true, allow_negative_numbers = true)]
	pub values: Vec<String>,
	/// Write the result here instead of overwriting the input file.
	#[arg(long, short)]
	pub output: Option<PathBuf>,
	/// Write in place and save already-written elements even if a later one fails.
	///
	/// Literals are checked against every occurrence's type up front, so only a value span
	/// running past the end of the blob can leave a partial write behind.
	#[arg(long)]
	pub partial: bool,
	#[arg(long)]
	pub json: bool,
}

/// Rewrite a property and save the blob.
pub fn run(args: Args) -> CmdResult {
	let Args {
		file: path,
		key,
		values: literals,
		output,
		partial,
		json,
	} = args;

	let mut blob = read_blob(&path)?;
	let occurrences = find_occurrences(&blob, &key);
	let Some(first) = occurrences.first() else {
		return Err(BlobError::KeyNotFound { key }.into());
	};

	let values = literals
		.iter()
		.enumerate()
		.map(|(index, literal)| occurrences.get(index).unwrap_or(first).property_type.parse_value(literal))
		.collect::<Result<Vec<Value>, _>>()?;
	let value = match <[Value; 1]>::try_from(values) {
		Ok([single]) => PropertyValue::Single(single),
		Err(values) => PropertyValue::Array(values),
	};

	let (before, _) = decode_key(&blob, &key);
	let destination = output.unwrap_or(path);

	let updated = if partial {
		let written = encode(&mut blob, &key, &value).map(|_| ());
		if let Err(err) = written {
			if matches!(err, BlobError::EncodeWrite { .. }) {
				write_blob(&destination, &blob)?;
				tracing::warn!(path = %destination.display(), "saved partially written blob");
			}
			return Err(err.into());
		}
		blob
	} else {
		encode_copy(&blob, &key, &value)?
	};

	write_blob(&destination, &updated)?;
	let (after, _) = decode_key(&updated, &key);
	tracing::info!(key = %key, path = %destination.display(), "property updated");

	if json {
		let payload = SetJson {
			path: destination.display().to_string(),
			key,
			before: before.as_ref().map(property_json),
			after: after.as_ref().map(property_json),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", destination.display());
	println!("key: {key}");
	println!("before: {}", render_optional(before.as_ref()));
	println!("after: {}", render_optional(after.as_ref()));
	Ok(())
}

fn render_optional(value: Option<&PropertyValue>) -> String {
	value.map_or_else(|| "-".to_owned(), ToString::to_string)
}

#[derive(serde::Serialize)]
struct SetJson {
	path: String,
	key: String,
	before: Option<serde_json::Value>,
	after: Option<serde_json::Value>,
}
