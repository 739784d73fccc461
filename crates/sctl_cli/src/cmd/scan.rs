use std::path::PathBuf;

use sctl::blob::find_occurrences;

use crate::cmd::CmdResult;
use crate::cmd::util::{emit_json, read_blob};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	pub key: String,
	#[arg(long)]
	pub json: bool,
}

/// List every decodable occurrence of a key with its offsets and type.
pub fn run(args: Args) -> CmdResult {
	let Args { file: path, key, json } = args;

	let blob = read_blob(&path)?;
	let occurrences = find_occurrences(&blob, &key);
	if occurrences.is_empty() {
		tracing::warn!(key = %key, "no occurrences found");
	}

	if json {
		let payload = ScanJson {
			path: path.display().to_string(),
			key,
			blob_len: blob.len(),
			occurrences: occurrences
				.iter()
				.enumerate()
				.map(|(index, occ)| OccurrenceJson {
					index,
					key_offset: occ.key_offset,
					value_offset: occ.value_offset,
					type_name: occ.property_type.type_name().to_owned(),
					width: occ.property_type.width(),
					in_bounds: occ.value_end() <= blob.len(),
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("key: {key}");
	println!("blob_len: {}", blob.len());
	println!("occurrences: {}", occurrences.len());
	println!("index\tkey_offset\tvalue_offset\ttype\twidth");
	for (index, occ) in occurrences.iter().enumerate() {
		println!(
			"{}\t{}\t{}\t{}\t{}",
			index,
			occ.key_offset,
			occ.value_offset,
			occ.property_type.type_name(),
			occ.property_type.width()
		);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ScanJson {
	path: String,
	key: String,
	blob_len: usize,
	occurrences: Vec<OccurrenceJson>,
}

#[derive(serde::Serialize)]
struct OccurrenceJson {
	index: usize,
	key_offset: usize,
	value_offset: usize,
	#[serde(rename = "type")]
	type_name: String,
	width: usize,
	in_bounds: bool,
}
