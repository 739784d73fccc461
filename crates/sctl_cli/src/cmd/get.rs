use std::path::{Path, PathBuf};

use sctl::blob::{DecodeReport, decode};

use crate::cmd::CmdResult;
use crate::cmd::util::{emit_json, property_json, read_blob};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(required = true)]
	pub keys: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Decode requested keys and print them as rows or JSON.
pub fn run(args: Args) -> CmdResult {
	let Args { file: path, keys, json } = args;

	let blob = read_blob(&path)?;
	let report = decode(&blob, keys.as_slice())?;
	for warning in &report.warnings {
		tracing::warn!("{warning}");
	}

	if json {
		print_json(&path, &report);
	} else {
		println!("path: {}", path.display());
		print_rows(&report);
	}

	Ok(())
}

/// Print decoded properties as `key\tvalue` rows.
pub(crate) fn print_rows(report: &DecodeReport) {
	println!("key\tvalue");
	for entry in report.properties.iter() {
		println!("{}\t{}", entry.name, entry.value);
	}
}

/// Print decoded properties and warnings as a JSON document.
pub(crate) fn print_json(path: &Path, report: &DecodeReport) {
	let payload = DecodeJson {
		path: path.display().to_string(),
		properties: report
			.properties
			.iter()
			.map(|entry| (entry.name.to_string(), property_json(&entry.value)))
			.collect(),
		warnings: report.warnings.iter().map(ToString::to_string).collect(),
	};

	emit_json(&payload);
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	properties: serde_json::Map<String, serde_json::Value>,
	warnings: Vec<String>,
}
