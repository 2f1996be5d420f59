use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::anim::{AnimError, Result};

/// Separator between range start and end.
pub const RANGE_SEP: char = ':';

/// Frame window with independently optional bounds.
///
/// A missing bound means the range is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
	/// First frame, if bounded.
	pub start: Option<f64>,
	/// Last frame, if bounded.
	pub end: Option<f64>,
}

impl TimeRange {
	/// Build from optional bounds.
	pub fn new(start: Option<f64>, end: Option<f64>) -> Self {
		Self { start, end }
	}

	/// Closed range `start:end`.
	pub fn closed(start: f64, end: f64) -> Self {
		Self::new(Some(start), Some(end))
	}

	/// Whether both bounds are present and equal.
	pub fn is_single_pose(&self) -> bool {
		matches!((self.start, self.end), (Some(start), Some(end)) if start == end)
	}

	/// `end - start` when both bounds are present.
	pub fn width(&self) -> Option<f64> {
		Some(self.end? - self.start?)
	}
}

impl fmt::Display for TimeRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let start = self.start.map(format_frame).unwrap_or_default();
		let end = self.end.map(format_frame).unwrap_or_default();
		write!(f, "{start}{RANGE_SEP}{end}")
	}
}

/// Parse a `start:end` range specification.
///
/// Tokens are the non-empty pieces between separators. Two numeric tokens give
/// a closed range; no tokens or a non-numeric first token give `None`; a
/// leading separator gives `(None, first)`; anything else gives
/// `(first, None)`, so `"43:as2:32df:4"` reads as `43:`.
pub fn parse_time_range(input: &str) -> Option<TimeRange> {
	let tokens: Vec<&str> = input.split(RANGE_SEP).filter(|token| !token.is_empty()).collect();

	if let [first, second] = tokens.as_slice()
		&& let (Some(start), Some(end)) = (parse_frame(first), parse_frame(second))
	{
		return Some(TimeRange::closed(start, end));
	}

	let first = parse_frame(tokens.first()?)?;
	if input.starts_with(RANGE_SEP) {
		Some(TimeRange::new(None, Some(first)))
	} else {
		Some(TimeRange::new(Some(first), None))
	}
}

/// Parse one frame number; non-finite values are rejected.
pub fn parse_frame(token: &str) -> Option<f64> {
	token.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Render a frame without trailing zeros, rounded to 1/10000 of a frame.
///
/// Frames too large to scale are printed as given.
pub fn format_frame(frame: f64) -> String {
	let scaled = frame * 10_000.0;
	if !scaled.is_finite() {
		return format!("{}", frame + 0.0);
	}
	let rounded = scaled.round() / 10_000.0 + 0.0;
	format!("{rounded}")
}

/// How pasted keys combine with keys already on the target curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasteMode {
	/// Shift existing keys to make room.
	Insert,
	/// Replace keys inside the target range.
	Replace,
	/// Replace the whole target curve.
	ReplaceCompletely,
	/// Merge with existing keys.
	Merge,
	/// Scale to the target range, then insert.
	ScaleInsert,
	/// Scale to the target range, then replace.
	ScaleReplace,
	/// Scale to the target range, then merge.
	ScaleMerge,
	/// Fit to the target range, then insert.
	FitInsert,
	/// Fit to the target range, then replace.
	FitReplace,
	/// Fit to the target range, then merge.
	FitMerge,
}

impl PasteMode {
	/// All modes in declaration order.
	pub const ALL: [Self; 10] = [
		Self::Insert,
		Self::Replace,
		Self::ReplaceCompletely,
		Self::Merge,
		Self::ScaleInsert,
		Self::ScaleReplace,
		Self::ScaleMerge,
		Self::FitInsert,
		Self::FitReplace,
		Self::FitMerge,
	];

	/// Host option name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Insert => "insert",
			Self::Replace => "replace",
			Self::ReplaceCompletely => "replaceCompletely",
			Self::Merge => "merge",
			Self::ScaleInsert => "scaleInsert",
			Self::ScaleReplace => "scaleReplace",
			Self::ScaleMerge => "scaleMerge",
			Self::FitInsert => "fitInsert",
			Self::FitReplace => "fitReplace",
			Self::FitMerge => "fitMerge",
		}
	}

	/// Modes that paste at a single time instead of over a range.
	pub fn pastes_at_point(self) -> bool {
		matches!(self, Self::Insert | Self::Merge)
	}
}

impl fmt::Display for PasteMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PasteMode {
	type Err = AnimError;

	fn from_str(name: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|mode| mode.as_str() == name)
			.ok_or_else(|| AnimError::UnknownPasteMode { name: name.to_owned() })
	}
}
