use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::anim::{PasteMode, RANGE_SEP, TimeRange, format_frame, parse_frame, parse_time_range};

/// Source spec selecting the first key of the source animation.
pub const FIRST_KEY: &str = "first";
/// Source spec selecting the last key of the source animation.
pub const LAST_KEY: &str = "last";

/// Remap policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RemapOptions {
	/// Width added to single-pose ranges so they paste as a non-empty span.
	pub epsilon: f64,
}

impl Default for RemapOptions {
	fn default() -> Self {
		Self { epsilon: 0.01 }
	}
}

/// Where copied keys land on the target curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TargetTime {
	/// Keep the keys at their source times.
	Natural,
	/// Paste starting at a single frame.
	At(f64),
	/// Paste over an explicit frame window.
	Span(TimeRange),
}

impl TargetTime {
	/// First target frame, if the target names one.
	pub fn start(&self) -> Option<f64> {
		match self {
			Self::Natural => None,
			Self::At(frame) => Some(*frame),
			Self::Span(range) => range.start,
		}
	}
}

impl fmt::Display for TargetTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Natural => Ok(()),
			Self::At(frame) => f.write_str(&format_frame(*frame)),
			Self::Span(range) => write!(f, "{range}"),
		}
	}
}

/// Resolved copy/paste parameters for one remap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RemapResult {
	/// Range to copy from the source curves; `None` copies everything.
	pub source: Option<TimeRange>,
	/// Paste destination.
	pub target: TargetTime,
	/// Paste mode, forced to `replace` for single poses.
	pub mode: PasteMode,
	/// Frame of the helper key to delete after pasting a single pose.
	pub delete_at: Option<f64>,
}

impl RemapResult {
	/// Whether a single-pose helper key has to be removed after pasting.
	pub fn deletes_helper_key(&self) -> bool {
		self.delete_at.is_some()
	}
}

/// Resolve a remap with default [`RemapOptions`].
pub fn resolve_remap(source_spec: &str, target_spec: &str, mode: PasteMode, first_key: f64, last_key: f64) -> RemapResult {
	resolve_remap_with(source_spec, target_spec, mode, first_key, last_key, &RemapOptions::default())
}

/// Resolve source window, paste destination and mode for one remap.
///
/// `first_key` and `last_key` are the key time bounds of the source
/// animation. Single poses are widened by `options.epsilon` and pasted with
/// `replace`; the extra key is scheduled for deletion at the target start
/// plus epsilon, or at the widened end when no target start is given.
pub fn resolve_remap_with(source_spec: &str, target_spec: &str, mode: PasteMode, first_key: f64, last_key: f64, options: &RemapOptions) -> RemapResult {
	let epsilon = options.epsilon;
	let mut mode = mode;

	let mut source = match source_spec.trim() {
		FIRST_KEY => Some(TimeRange::closed(first_key, first_key)),
		LAST_KEY => Some(TimeRange::closed(last_key, last_key)),
		spec => parse_time_range(spec),
	};

	let single_pose = match source.as_mut() {
		Some(range) if range.is_single_pose() => {
			range.end = range.end.map(|end| end + epsilon);
			true
		}
		Some(_) => false,
		None => first_key == last_key,
	};
	if single_pose && source.is_none() {
		source = Some(TimeRange::closed(first_key, first_key + epsilon));
	}

	let mut delete_at = None;
	if single_pose {
		mode = PasteMode::Replace;
		let nudged_end = source.and_then(|range| range.end).unwrap_or(first_key + epsilon);
		delete_at = Some(match target_start(target_spec) {
			Some(start) => start + epsilon,
			None => nudged_end,
		});
	}

	let target = resolve_target(target_spec, mode, source.as_ref(), first_key, last_key);

	RemapResult {
		source,
		target,
		mode,
		delete_at,
	}
}

fn target_start(target_spec: &str) -> Option<f64> {
	let spec = target_spec.trim();
	if spec.contains(RANGE_SEP) {
		parse_time_range(spec)?.start
	} else {
		parse_frame(spec)
	}
}

fn resolve_target(target_spec: &str, mode: PasteMode, source: Option<&TimeRange>, first_key: f64, last_key: f64) -> TargetTime {
	let spec = target_spec.trim();
	if spec.is_empty() {
		return TargetTime::Natural;
	}

	if spec.contains(RANGE_SEP) {
		return parse_time_range(spec).map_or(TargetTime::Natural, TargetTime::Span);
	}

	let Some(start) = parse_frame(spec) else {
		warn!(target_spec = spec, "unparseable target time, pasting at source times");
		return TargetTime::Natural;
	};

	if mode.pastes_at_point() {
		return TargetTime::At(start);
	}

	let source_start = source.and_then(|range| range.start).unwrap_or(first_key);
	let source_end = source.and_then(|range| range.end).unwrap_or(last_key);
	TargetTime::Span(TimeRange::closed(start, start + (source_end - source_start)))
}

#[cfg(test)]
mod tests;
