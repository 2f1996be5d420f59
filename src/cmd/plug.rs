use animio::anim::{Namespace, PlugPath, Result};
use serde::Serialize;

use crate::cmd::util::print_json;

#[derive(clap::Args)]
pub struct Args {
	/// Plug path such as `ref:arm_L.translateX`.
	pub path: String,
	/// Namespace to replace.
	#[arg(long, requires = "to_ns")]
	pub from_ns: Option<String>,
	/// Replacement namespace; empty strips the namespace.
	#[arg(long, requires = "from_ns")]
	pub to_ns: Option<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct PlugReport {
	node: String,
	namespace: String,
	base: String,
	attribute: String,
	remapped: Option<String>,
}

/// Split a plug path and print its parts.
pub fn run(args: Args) -> Result<()> {
	let Args { path, from_ns, to_ns, json } = args;

	let plug = PlugPath::parse(&path)?;
	let (namespace, base) = plug.split_node();

	let remapped = match (from_ns, to_ns) {
		(Some(from), Some(to)) => Some(plug.with_namespace(&Namespace::new(&from), &to).to_string()),
		_ => None,
	};

	let report = PlugReport {
		node: plug.node.clone(),
		namespace: namespace.to_string(),
		base: base.to_owned(),
		attribute: plug.attribute.clone(),
		remapped,
	};

	if json {
		return print_json(&report);
	}

	println!("node: {}", report.node);
	println!("namespace: {}", report.namespace);
	println!("base: {}", report.base);
	println!("attribute: {}", report.attribute);
	if let Some(remapped) = &report.remapped {
		println!("remapped: {remapped}");
	}
	Ok(())
}
