use animio::anim::{AnimError, Result, format_frame};
use serde::Serialize;

/// Split a `SEARCH=REPLACE` argument at the first `=`.
pub(crate) fn parse_pair(pair: &str) -> Result<(String, String)> {
	let (search, replace) = pair.split_once('=').ok_or_else(|| AnimError::InvalidPair { pair: pair.to_owned() })?;
	Ok((search.to_owned(), replace.to_owned()))
}

/// Render optional frame as label, `none` when absent.
pub(crate) fn frame_label(frame: Option<f64>) -> String {
	frame.map(format_frame).unwrap_or_else(|| "none".to_owned())
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}
