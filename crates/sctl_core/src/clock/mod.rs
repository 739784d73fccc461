use thiserror::Error;

/// Seconds in one in-game day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Errors produced while validating clock settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClockError {
	/// Sunrise was not a `HH:MM:SS` time of day.
	#[error("invalid sunrise time {value:?}, expected HH:MM:SS")]
	InvalidSunrise {
		/// User-provided sunrise string.
		value: String,
	},
	/// Sunset was not a `HH:MM:SS` time of day.
	#[error("invalid sunset time {value:?}, expected HH:MM:SS")]
	InvalidSunset {
		/// User-provided sunset string.
		value: String,
	},
	/// Time speed multiplier was not a positive finite number.
	#[error("time speed must be a positive number, got {value}")]
	InvalidTimeSpeed {
		/// Rejected multiplier.
		value: f64,
	},
	/// Cycle length was not a positive finite number of hours.
	#[error("cycle hours must be a positive number, got {value}")]
	InvalidCycleHours {
		/// Rejected cycle length.
		value: f64,
	},
}

/// Server clock settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockOptions {
	/// In-game time speed multiplier.
	pub time_speed: f64,
	/// In-game hours in one day/night cycle.
	pub cycle_hours: f64,
	/// In-game sunrise as `HH:MM:SS`.
	pub sunrise: String,
	/// In-game sunset as `HH:MM:SS`.
	pub sunset: String,
}

impl Default for ClockOptions {
	fn default() -> Self {
		Self {
			time_speed: 3.84,
			cycle_hours: 24.0,
			sunrise: "06:00:00".to_owned(),
			sunset: "21:00:00".to_owned(),
		}
	}
}

/// Derived day/night durations for one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockCycle {
	/// Real-life hours needed for one in-game cycle.
	pub real_time_cycle: f64,
	/// In-game daylight hours.
	pub ig_duration_day: f64,
	/// In-game night hours.
	pub ig_duration_night: f64,
	/// Real-life daylight hours.
	pub rl_duration_day: f64,
	/// Real-life night hours.
	pub rl_duration_night: f64,
	/// Share of the cycle that is daylight, in percent.
	pub percentage_day: f64,
	/// Share of the cycle that is night, in percent.
	pub percentage_night: f64,
}

/// Compute day/night durations from clock settings.
pub fn calculate(options: &ClockOptions) -> Result<ClockCycle, ClockError> {
	if !options.time_speed.is_finite() || options.time_speed <= 0.0 {
		return Err(ClockError::InvalidTimeSpeed { value: options.time_speed });
	}
	if !options.cycle_hours.is_finite() || options.cycle_hours <= 0.0 {
		return Err(ClockError::InvalidCycleHours { value: options.cycle_hours });
	}

	let sunrise = parse_time_of_day(&options.sunrise).ok_or_else(|| ClockError::InvalidSunrise {
		value: options.sunrise.clone(),
	})?;
	let sunset = parse_time_of_day(&options.sunset).ok_or_else(|| ClockError::InvalidSunset {
		value: options.sunset.clone(),
	})?;

	let real_time_cycle = options.cycle_hours / options.time_speed;
	let ig_duration_day = daylight_hours(sunrise, sunset);
	let percentage_day = ig_duration_day / options.cycle_hours * 100.0;
	let percentage_night = 100.0 - percentage_day;

	Ok(ClockCycle {
		real_time_cycle,
		ig_duration_day,
		ig_duration_night: options.cycle_hours - ig_duration_day,
		rl_duration_day: percentage_day / 100.0 * real_time_cycle,
		rl_duration_night: percentage_night / 100.0 * real_time_cycle,
		percentage_day,
		percentage_night,
	})
}

/// Parse a strict two-digit `HH:MM:SS` time of day into seconds since midnight.
pub fn parse_time_of_day(input: &str) -> Option<u32> {
	let mut parts = input.split(':');
	let hours = two_digits(parts.next()?)?;
	let minutes = two_digits(parts.next()?)?;
	let seconds = two_digits(parts.next()?)?;
	if parts.next().is_some() || hours > 23 || minutes > 59 || seconds > 59 {
		return None;
	}

	Some(hours * 3600 + minutes * 60 + seconds)
}

/// In-game daylight hours between sunrise and sunset, wrapping past midnight.
fn daylight_hours(sunrise: u32, sunset: u32) -> f64 {
	let seconds = if sunset >= sunrise {
		sunset - sunrise
	} else {
		SECONDS_PER_DAY - sunrise + sunset
	};
	f64::from(seconds) / 3600.0
}

fn two_digits(part: &str) -> Option<u32> {
	if part.len() != 2 || !part.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	part.parse().ok()
}
