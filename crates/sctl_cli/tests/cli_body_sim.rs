#![allow(missing_docs)]

use std::process::{Command, Output};

use sctl_testkit::{BlobBuilder, write_scratch_blob};
use serde_json::{Value, json};

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_sctl"))
		.args(args)
		.env_remove("SCTL_LOG")
		.output()
		.expect("sctl command executes")
}

fn body_blob() -> Vec<u8> {
	BlobBuilder::new()
		.raw(b"PrisonerBodySimulationSave\x00")
		.bool("IsDead", false)
		.float("BaseStrength", 4.5)
		.float("BaseConstitution", 3.0)
		.double("LifeTimeSinceSpawn", 5_400.5)
		.float("BodyTemperature", 36.5)
		.build()
}

#[test]
fn default_keys_decode_silently() {
	let path = write_scratch_blob("body-default.bin", &body_blob());
	let path = path.to_string_lossy().into_owned();
	let output = run(&["body-sim", &path, "--json"]);

	assert!(output.status.success());
	assert!(output.stderr.is_empty(), "default key set should not log warnings without -v");
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["properties"]["BaseStrength"], json!(4.5));
	assert_eq!(json["properties"]["LifeTimeSinceSpawn"], json!(5_400.5));
	assert_eq!(json["properties"]["IsDead"], json!(false));

	let keys: Vec<&str> = json["properties"].as_object().expect("properties object").keys().map(String::as_str).collect();
	assert_eq!(keys, vec!["IsDead", "BaseStrength", "BaseConstitution", "LifeTimeSinceSpawn", "BodyTemperature"]);
}

#[test]
fn verbose_flag_shows_warnings_for_default_keys() {
	let path = write_scratch_blob("body-verbose.bin", &body_blob());
	let path = path.to_string_lossy().into_owned();
	let output = run(&["-v", "body-sim", &path]);

	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("PhoenixTearsAmount"));
}

#[test]
fn custom_props_show_warnings() {
	let path = write_scratch_blob("body-props.bin", &body_blob());
	let path = path.to_string_lossy().into_owned();
	let output = run(&["body-sim", &path, "--props", "BaseStrength", "Hunger"]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.lines().any(|line| line == "BaseStrength\t4.5"));
	assert!(String::from_utf8_lossy(&output.stderr).contains("Hunger"));
}

#[test]
fn empty_result_prints_notice() {
	let path = write_scratch_blob("body-empty.bin", b"not a body simulation blob");
	let path = path.to_string_lossy().into_owned();
	let output = run(&["bodysim", &path]);

	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stdout).starts_with("no body simulation values found"));
}
