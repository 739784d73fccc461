#![allow(missing_docs)]

use std::process::{Command, Output};

use serde_json::Value;

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_sctl"))
		.args(args)
		.env_remove("SCTL_LOG")
		.output()
		.expect("sctl command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(output.status.success(), "sctl time failed: {}", String::from_utf8_lossy(&output.stderr));
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

#[test]
fn defaults_produce_server_cycle() {
	let json = run_json(&["time", "--json"]);

	assert_eq!(json["real_time_cycle"], 6.25);
	assert_eq!(json["ig_duration_day"], 15.0);
	assert_eq!(json["percentage_day"], 62.5);
	assert_eq!(json["sunrise"], "06:00:00");
}

#[test]
fn custom_speed_and_window() {
	let json = run_json(&["time", "--time-speed", "2", "--sunrise", "20:00:00", "--sunset", "08:00:00", "--json"]);

	assert_eq!(json["real_time_cycle"], 12.0);
	assert_eq!(json["ig_duration_day"], 12.0);
	assert_eq!(json["rl_duration_night"], 6.0);
}

#[test]
fn text_output_summarises_cycle() {
	let output = run(&["time"]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("real_time_cycle\t6.25"));
	assert!(stdout.contains("a 24h in-game cycle lasts 6.25 real hours"));
	assert!(stdout.contains("day 3.91h (62.5%)"));
}

#[test]
fn invalid_sunrise_fails() {
	let output = run(&["time", "--sunrise", "6:00"]);

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("invalid sunrise time"));
}

#[test]
fn non_positive_speed_and_cycle_are_rejected() {
	let output = run(&["time", "--time-speed", "-1"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("time speed must be a positive number, got -1"));

	let output = run(&["time", "--cycle-hours", "-1"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("cycle hours must be a positive number, got -1"));
}
