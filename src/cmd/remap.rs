use animio::anim::{PasteMode, RemapOptions, Result, TargetTime, resolve_remap_with};

use crate::cmd::util::{frame_label, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Source range: `start:end`, `first`, `last` or empty for the whole animation.
	#[arg(long, default_value = "", allow_hyphen_values = true)]
	pub source: String,
	/// Target frame or `start:end` range; empty keeps source times.
	#[arg(long, default_value = "", allow_hyphen_values = true)]
	pub target: String,
	/// Paste mode host option name.
	#[arg(long, default_value_t = PasteMode::FitInsert)]
	pub mode: PasteMode,
	/// First key time of the source animation.
	#[arg(long, allow_hyphen_values = true)]
	pub first: f64,
	/// Last key time of the source animation.
	#[arg(long, allow_hyphen_values = true)]
	pub last: f64,
	/// Width added to single-pose ranges.
	#[arg(long)]
	pub epsilon: Option<f64>,
	#[arg(long)]
	pub json: bool,
}

/// Resolve and print remap copy/paste parameters.
pub fn run(args: Args) -> Result<()> {
	let Args {
		source,
		target,
		mode,
		first,
		last,
		epsilon,
		json,
	} = args;

	let mut options = RemapOptions::default();
	if let Some(epsilon) = epsilon {
		options.epsilon = epsilon;
	}

	let result = resolve_remap_with(&source, &target, mode, first, last, &options);

	if json {
		return print_json(&result);
	}

	println!("source: {}", result.source.map(|range| range.to_string()).unwrap_or_else(|| "none".to_owned()));
	match result.target {
		TargetTime::Natural => println!("target: natural"),
		target => println!("target: {target}"),
	}
	println!("mode: {}", result.mode);
	println!("delete_at: {}", frame_label(result.delete_at));
	Ok(())
}
