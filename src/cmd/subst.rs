use animio::anim::{Result, SearchReplaceSpec};
use serde::Serialize;

use crate::cmd::util::{parse_pair, print_json};

#[derive(clap::Args)]
pub struct Args {
	/// Text to rewrite.
	pub input: String,
	/// Search/replace step as `SEARCH=REPLACE`, applied in the given order.
	#[arg(long = "pair", required = true)]
	pub pairs: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct SubstReport<'a> {
	input: &'a str,
	output: String,
	spec: &'a SearchReplaceSpec,
}

/// Apply the search/replace pairs and print the result.
pub fn run(args: Args) -> Result<()> {
	let Args { input, pairs, json } = args;

	let mut spec = SearchReplaceSpec::default();
	for pair in &pairs {
		let (search, replace) = parse_pair(pair)?;
		spec.push(search, replace);
	}

	let output = spec.apply(&input);

	if json {
		return print_json(&SubstReport {
			input: &input,
			output,
			spec: &spec,
		});
	}

	println!("input: {input}");
	println!("steps: {}", spec.pairs.len());
	println!("output: {output}");
	Ok(())
}
