#![allow(missing_docs)]

use std::io::IsTerminal;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "sctl", version, about = "Tools for SCUM dedicated server data")]
struct Cli {
	/// Raise log verbosity (-v info, -vv debug, -vvv trace). `SCTL_LOG` overrides.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode named properties from a blob file.
	Get(cmd::get::Args),
	/// Rewrite a property's value(s) in a blob file.
	Set(cmd::set::Args),
	/// List every occurrence of a key in a blob file.
	Scan(cmd::scan::Args),
	/// Print a prisoner's body simulation stats.
	#[command(alias = "bodysim", alias = "body-simulation")]
	BodySim(cmd::body_sim::Args),
	/// Convert server clock settings into day/night durations.
	Time(cmd::time::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> cmd::CmdResult {
	match cli.command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Set(args) => cmd::set::run(args),
		Commands::Scan(args) => cmd::scan::run(args),
		Commands::BodySim(args) => cmd::body_sim::run(args, cli.verbose),
		Commands::Time(args) => cmd::time::run(args),
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_env("SCTL_LOG").unwrap_or_else(|_| EnvFilter::new(level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(false)
		.init();
}
