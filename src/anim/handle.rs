use serde::Serialize;
use tracing::debug;

use crate::anim::{AnimError, Result};

/// Separator between target plug names in one stored entry.
pub const TARGET_SEP: char = ',';

/// One source curve to target plug pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
	/// Source animation curve name.
	pub curve: String,
	/// Target plug path the curve drives.
	pub target: String,
}

/// Target plugs driven by each managed animation curve.
///
/// Entry `i` belongs to managed curve `i`. Stored on the handle node as a
/// string array with comma-joined plug names per curve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionInfo {
	entries: Vec<Vec<String>>,
}

impl ConnectionInfo {
	/// Build from per-curve target plug lists.
	pub fn from_targets<I, T, S>(targets: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			entries: targets.into_iter().map(|entry| entry.into_iter().map(Into::into).collect()).collect(),
		}
	}

	/// Decode the stored string array.
	pub fn decode<S: AsRef<str>>(stored: &[S]) -> Self {
		Self {
			entries: stored
				.iter()
				.map(|entry| entry.as_ref().split(TARGET_SEP).filter(|name| !name.is_empty()).map(str::to_owned).collect())
				.collect(),
		}
	}

	/// Encode into the stored string array.
	pub fn encode(&self) -> Vec<String> {
		let separator = TARGET_SEP.to_string();
		self.entries.iter().map(|entry| entry.join(separator.as_str())).collect()
	}

	/// Number of managed curves.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no curves are managed.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Target plug names of curve `index`.
	pub fn targets(&self, index: usize) -> Option<&[String]> {
		self.entries.get(index).map(Vec::as_slice)
	}

	/// Forget all stored targets.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// All assignments, unconverted and unfiltered.
	pub fn assignments<S: AsRef<str>>(&self, curves: &[S]) -> Result<Vec<Assignment>> {
		self.assignments_with(curves, |_, target| target.to_owned(), |_, _| true)
	}

	/// Pair each curve with its stored targets.
	///
	/// `converter(curve, target)` returns the plug name to use instead of the
	/// stored one; `predicate(curve, converted)` filters the result.
	pub fn assignments_with<S, C, P>(&self, curves: &[S], converter: C, predicate: P) -> Result<Vec<Assignment>>
	where
		S: AsRef<str>,
		C: Fn(&str, &str) -> String,
		P: Fn(&str, &str) -> bool,
	{
		if curves.len() != self.entries.len() {
			return Err(AnimError::ConnectionInfoOutOfSync {
				curves: curves.len(),
				entries: self.entries.len(),
			});
		}

		let mut out = Vec::new();
		for (curve, entry) in curves.iter().zip(&self.entries) {
			let curve = curve.as_ref();
			if entry.is_empty() {
				debug!(curve, "no stored targets for curve");
				continue;
			}

			for stored in entry {
				let target = converter(curve, stored);
				if target.is_empty() || !predicate(curve, &target) {
					continue;
				}
				out.push(Assignment {
					curve: curve.to_owned(),
					target,
				});
			}
		}

		Ok(out)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::anim::{Namespace, PlugPath};

	fn sample() -> ConnectionInfo {
		ConnectionInfo::from_targets([vec!["src:arm_L.tx", "src:arm_R.tx"], vec!["src:spine.ry"], vec![]])
	}

	#[test]
	fn encode_decode_keeps_entries() {
		let info = sample();
		let stored = info.encode();
		assert_eq!(stored, vec!["src:arm_L.tx,src:arm_R.tx".to_owned(), "src:spine.ry".to_owned(), String::new()]);

		let decoded = ConnectionInfo::decode(&stored);
		assert_eq!(decoded, info);
		assert_eq!(decoded.len(), 3);
		assert_eq!(decoded.targets(1), Some(&["src:spine.ry".to_owned()][..]));
	}

	#[test]
	fn assignments_pair_curves_with_targets() {
		let info = sample();
		let items = info.assignments(&["crvA", "crvB", "crvC"]).expect("in sync");

		let pairs: Vec<_> = items.iter().map(|item| (item.curve.as_str(), item.target.as_str())).collect();
		assert_eq!(pairs, vec![("crvA", "src:arm_L.tx"), ("crvA", "src:arm_R.tx"), ("crvB", "src:spine.ry")]);
	}

	#[test]
	fn converter_and_predicate_apply_in_order() {
		let info = sample();
		let from = Namespace::new("src");
		let items = info
			.assignments_with(
				&["crvA", "crvB", "crvC"],
				|_, target| PlugPath::parse(target).map(|plug| plug.with_namespace(&from, "dst").to_string()).unwrap_or_default(),
				|_, target| !target.ends_with(".ry"),
			)
			.expect("in sync");

		let targets: Vec<_> = items.iter().map(|item| item.target.as_str()).collect();
		assert_eq!(targets, vec!["dst:arm_L.tx", "dst:arm_R.tx"]);
	}

	#[test]
	fn out_of_sync_curves_fail() {
		let err = sample().assignments(&["crvA"]).expect_err("count mismatch");
		assert!(matches!(err, AnimError::ConnectionInfoOutOfSync { curves: 1, entries: 3 }));
	}

	#[test]
	fn clear_forgets_entries() {
		let mut info = sample();
		info.clear();
		assert!(info.is_empty());
		assert!(info.assignments::<&str>(&[]).expect("empty in sync").is_empty());
	}
}
