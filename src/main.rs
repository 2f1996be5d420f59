#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "animio", about = "Animation remap, time-range, and substitution tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Apply ordered search/replace pairs to a string.
	Subst(cmd::subst::Args),
	/// Parse a `start:end` time range.
	Range(cmd::range::Args),
	/// Resolve copy/paste parameters for a remap.
	Remap(cmd::remap::Args),
	/// Split a plug path and optionally swap its namespace.
	Plug(cmd::plug::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run() -> animio::anim::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Subst(args) => cmd::subst::run(args),
		Commands::Range(args) => cmd::range::run(args),
		Commands::Remap(args) => cmd::remap::run(args),
		Commands::Plug(args) => cmd::plug::run(args),
	}
}
