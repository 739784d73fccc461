use std::path::PathBuf;

use sctl::blob::decode;

use crate::cmd::CmdResult;
use crate::cmd::get::{print_json, print_rows};
use crate::cmd::util::read_blob;

/// Properties of `ConZ.PrisonerBodySimulationSave` reported by default.
pub const BODY_SIMULATION_KEYS: [&str; 19] = [
	"IsDead",
	"BaseStrength",
	"BaseConstitution",
	"BaseDexterity",
	"BaseIntelligence",
	"InitialAge",
	"LifeTimeSinceInitialization",
	"LifeTimeSinceSpawn",
	"TimeOfDeath",
	"TimeOfRevive",
	"TimeOfComa",
	"TimeOfComaWakeUp",
	"Stamina",
	"AccumulatedFatigue",
	"HeartRate",
	"BreathingRate",
	"OxygenSaturation",
	"BodyTemperature",
	"PhoenixTearsAmount",
];

#[derive(clap::Args)]
pub struct Args {
	/// Exported `body_simulation` blob of one prisoner.
	pub file: PathBuf,
	/// Find custom properties by name instead of the default set.
	#[arg(short = 'p', long = "props", num_args = 1..)]
	pub props: Option<Vec<String>>,
	#[arg(long)]
	pub json: bool,
}

/// Decode and print body simulation stats.
///
/// Warnings for the default key set are only shown with `-v`, since most
/// prisoners lack some of those properties.
pub fn run(args: Args, verbose: u8) -> CmdResult {
	let Args { file: path, props, json } = args;

	let custom = props.is_some();
	let keys = props.unwrap_or_else(|| BODY_SIMULATION_KEYS.iter().map(|key| (*key).to_owned()).collect());

	let blob = read_blob(&path)?;
	let report = decode(&blob, keys.as_slice())?;

	if !report.warnings.is_empty() && (custom || verbose > 0) {
		tracing::warn!("one or more properties could not be read");
		for warning in &report.warnings {
			tracing::warn!("{warning}");
		}
	}

	if json {
		print_json(&path, &report);
		return Ok(());
	}

	if report.properties.is_empty() {
		println!("no body simulation values found in {}", path.display());
		return Ok(());
	}

	println!("body simulation: {}", path.display());
	print_rows(&report);
	Ok(())
}
