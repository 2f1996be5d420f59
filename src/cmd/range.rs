use animio::anim::{Result, TimeRange, parse_time_range};
use serde::Serialize;

use crate::cmd::util::{frame_label, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Range spec such as `12:32`, `12:` or `:42`.
	#[arg(allow_hyphen_values = true)]
	pub spec: String,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct RangeReport<'a> {
	spec: &'a str,
	range: Option<TimeRange>,
}

/// Parse and print a time range.
pub fn run(args: Args) -> Result<()> {
	let Args { spec, json } = args;
	let range = parse_time_range(&spec);

	if json {
		return print_json(&RangeReport { spec: &spec, range });
	}

	println!("spec: {spec}");
	match range {
		Some(range) => {
			println!("range: {range}");
			println!("start: {}", frame_label(range.start));
			println!("end: {}", frame_label(range.end));
		}
		None => println!("range: none"),
	}
	Ok(())
}
