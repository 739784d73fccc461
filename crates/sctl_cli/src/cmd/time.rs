use sctl::clock::{ClockOptions, calculate};

use crate::cmd::CmdResult;
use crate::cmd::util::{emit_json, format_float};

#[derive(clap::Args)]
pub struct Args {
	/// In-game time speed multiplier (server default 3.84).
	#[arg(long, allow_negative_numbers = true)]
	pub time_speed: Option<f64>,
	/// In-game hours per day/night cycle (default 24).
	#[arg(long, allow_negative_numbers = true)]
	pub cycle_hours: Option<f64>,
	/// In-game sunrise as HH:MM:SS (default 06:00:00).
	#[arg(long)]
	pub sunrise: Option<String>,
	/// In-game sunset as HH:MM:SS (default 21:00:00).
	#[arg(long)]
	pub sunset: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Print real-time and in-game day/night durations.
pub fn run(args: Args) -> CmdResult {
	let defaults = ClockOptions::default();
	let options = ClockOptions {
		time_speed: args.time_speed.unwrap_or(defaults.time_speed),
		cycle_hours: args.cycle_hours.unwrap_or(defaults.cycle_hours),
		sunrise: args.sunrise.unwrap_or(defaults.sunrise),
		sunset: args.sunset.unwrap_or(defaults.sunset),
	};
	let cycle = calculate(&options)?;

	if args.json {
		emit_json(&TimeJson {
			time_speed: options.time_speed,
			cycle_hours: options.cycle_hours,
			sunrise: options.sunrise,
			sunset: options.sunset,
			real_time_cycle: cycle.real_time_cycle,
			ig_duration_day: cycle.ig_duration_day,
			ig_duration_night: cycle.ig_duration_night,
			rl_duration_day: cycle.rl_duration_day,
			rl_duration_night: cycle.rl_duration_night,
			percentage_day: cycle.percentage_day,
			percentage_night: cycle.percentage_night,
		});
		return Ok(());
	}

	println!("real_time_cycle\t{}", cycle.real_time_cycle);
	println!("ig_duration_day\t{}", cycle.ig_duration_day);
	println!("ig_duration_night\t{}", cycle.ig_duration_night);
	println!("rl_duration_day\t{}", cycle.rl_duration_day);
	println!("rl_duration_night\t{}", cycle.rl_duration_night);
	println!("percentage_day\t{}", cycle.percentage_day);
	println!("percentage_night\t{}", cycle.percentage_night);
	println!();
	println!(
		"With sunrise at {} and sunset at {}, running at {}x speed:",
		options.sunrise, options.sunset, options.time_speed
	);
	println!("  a {}h in-game cycle lasts {} real hours", options.cycle_hours, format_float(cycle.real_time_cycle, 2));
	println!(
		"  real time: day {}h ({}%), night {}h ({}%)",
		format_float(cycle.rl_duration_day, 2),
		format_float(cycle.percentage_day, 1),
		format_float(cycle.rl_duration_night, 2),
		format_float(cycle.percentage_night, 1)
	);
	println!(
		"  in game: day {}h, night {}h",
		format_float(cycle.ig_duration_day, 2),
		format_float(cycle.ig_duration_night, 2)
	);

	Ok(())
}

#[derive(serde::Serialize)]
struct TimeJson {
	time_speed: f64,
	cycle_hours: f64,
	sunrise: String,
	sunset: String,
	real_time_cycle: f64,
	ig_duration_day: f64,
	ig_duration_night: f64,
	rl_duration_day: f64,
	rl_duration_night: f64,
	percentage_day: f64,
	percentage_night: f64,
}
