use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::anim::{AnimError, Assignment, PasteMode, RemapOptions, RemapResult, Result, TargetTime, TimeRange, resolve_remap_with};

/// Failure reported by the host scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SceneError {
	/// Host-provided failure text.
	pub message: String,
}

impl SceneError {
	/// Wrap a host failure message.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}

/// Host scene operations needed to transfer keys between curves.
pub trait SceneService {
	/// First and last key time over `curves`, `None` when they carry no keys.
	fn key_time_bounds(&self, curves: &[&str]) -> std::result::Result<Option<(f64, f64)>, SceneError>;

	/// Animation curve driving `target`, created when the plug is not animated yet.
	fn ensure_curve(&mut self, target: &str) -> std::result::Result<String, SceneError>;

	/// Copy keys of `curve` inside `range` (all keys for `None`) to the clipboard.
	fn copy_keys(&mut self, curve: &str, range: Option<&TimeRange>) -> std::result::Result<(), SceneError>;

	/// Paste clipboard keys onto `curve`.
	fn paste_keys(&mut self, curve: &str, target: &TargetTime, mode: PasteMode) -> std::result::Result<(), SceneError>;

	/// Remove the key of `curve` at `frame`.
	fn delete_key(&mut self, curve: &str, frame: f64) -> std::result::Result<(), SceneError>;

	/// Drive `target` by the output of `curve`, breaking any existing input connection.
	fn connect(&mut self, curve: &str, target: &str) -> std::result::Result<(), SceneError>;
}

/// Receives progress while assignments are pasted.
pub trait ProgressObserver {
	/// Called once with the number of assignments to process.
	fn on_start(&mut self, _total: usize) {}
	/// Called after each processed assignment.
	fn on_step(&mut self, _done: usize, _target: &str) {}
	/// Called once after the last assignment.
	fn on_finish(&mut self) {}
}

/// Observer that ignores progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// User-level remap parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemapRequest {
	/// Source range spec: `start:end`, `first`, `last` or empty.
	pub source: String,
	/// Target time spec: a frame, `start:end` or empty.
	pub target: String,
	/// Requested paste mode.
	pub mode: PasteMode,
	/// Policy configuration.
	pub options: RemapOptions,
}

impl Default for RemapRequest {
	fn default() -> Self {
		Self {
			source: String::new(),
			target: String::new(),
			mode: PasteMode::FitInsert,
			options: RemapOptions::default(),
		}
	}
}

/// Outcome of a paste run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemapReport {
	/// Policy the run used; `None` when there was nothing to paste.
	pub policy: Option<RemapResult>,
	/// Assignments whose keys were pasted.
	pub pasted: usize,
	/// Single-pose helper keys removed again.
	pub helper_keys_deleted: usize,
	/// Target plugs that could not be resolved and were left untouched.
	pub skipped: Vec<String>,
}

/// Paste animation of each assignment's curve onto its target plug.
///
/// The policy is resolved once from the key bounds of all source curves.
/// Per assignment the target curve is created if needed, keys are copied and
/// pasted, and the single-pose helper key is deleted when the policy asks.
/// Targets whose curve cannot be resolved are skipped and listed in the
/// report; failing copy, paste or delete aborts the run.
pub fn paste_animation<S, O>(scene: &mut S, assignments: &[Assignment], request: &RemapRequest, observer: &mut O) -> Result<RemapReport>
where
	S: SceneService + ?Sized,
	O: ProgressObserver + ?Sized,
{
	observer.on_start(assignments.len());
	let result = paste_all(scene, assignments, request, observer);
	observer.on_finish();
	result
}

fn paste_all<S, O>(scene: &mut S, assignments: &[Assignment], request: &RemapRequest, observer: &mut O) -> Result<RemapReport>
where
	S: SceneService + ?Sized,
	O: ProgressObserver + ?Sized,
{
	let mut report = RemapReport {
		policy: None,
		pasted: 0,
		helper_keys_deleted: 0,
		skipped: Vec::new(),
	};
	if assignments.is_empty() {
		return Ok(report);
	}

	let mut curves: Vec<&str> = assignments.iter().map(|item| item.curve.as_str()).collect();
	curves.sort_unstable();
	curves.dedup();

	let (first_key, last_key) = scene
		.key_time_bounds(&curves)
		.map_err(|source| AnimError::SceneQuery { source })?
		.ok_or(AnimError::NoAnimation { curves: curves.len() })?;

	let policy = resolve_remap_with(&request.source, &request.target, request.mode, first_key, last_key, &request.options);
	debug!(?policy, first_key, last_key, "resolved remap policy");
	report.policy = Some(policy);

	for (idx, item) in assignments.iter().enumerate() {
		match scene.ensure_curve(&item.target) {
			Ok(target_curve) => {
				paste_one(scene, item, &target_curve, &policy).map_err(|source| AnimError::ScenePaste {
					target: item.target.clone(),
					source,
				})?;
				report.pasted += 1;
				if policy.deletes_helper_key() {
					report.helper_keys_deleted += 1;
				}
			}
			Err(err) => {
				warn!(plug = %item.target, %err, "target plug does not exist, skipping");
				report.skipped.push(item.target.clone());
			}
		}
		observer.on_step(idx + 1, &item.target);
	}

	info!(pasted = report.pasted, skipped = report.skipped.len(), mode = %policy.mode, "pasted animation");
	Ok(report)
}

fn paste_one<S: SceneService + ?Sized>(scene: &mut S, item: &Assignment, target_curve: &str, policy: &RemapResult) -> std::result::Result<(), SceneError> {
	scene.copy_keys(&item.curve, policy.source.as_ref())?;
	scene.paste_keys(target_curve, &policy.target, policy.mode)?;
	if let Some(frame) = policy.delete_at {
		scene.delete_key(target_curve, frame)?;
	}
	Ok(())
}

/// Connect each assignment's curve to its target plug, replacing existing inputs.
///
/// Returns the number of connections made. Stops at the first failing connection.
pub fn apply_animation<S, O>(scene: &mut S, assignments: &[Assignment], observer: &mut O) -> Result<usize>
where
	S: SceneService + ?Sized,
	O: ProgressObserver + ?Sized,
{
	observer.on_start(assignments.len());
	let result = connect_all(scene, assignments, observer);
	observer.on_finish();
	result
}

fn connect_all<S, O>(scene: &mut S, assignments: &[Assignment], observer: &mut O) -> Result<usize>
where
	S: SceneService + ?Sized,
	O: ProgressObserver + ?Sized,
{
	for (idx, item) in assignments.iter().enumerate() {
		scene.connect(&item.curve, &item.target).map_err(|source| AnimError::SceneConnect {
			target: item.target.clone(),
			source,
		})?;
		observer.on_step(idx + 1, &item.target);
	}

	debug!(connected = assignments.len(), "applied animation");
	Ok(assignments.len())
}
