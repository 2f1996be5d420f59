use thiserror::Error;

use crate::anim::remap::SceneError;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, AnimError>;

/// Errors produced while parsing user input and driving animation remaps.
#[derive(Debug, Error)]
pub enum AnimError {
	/// Flat search/replace list did not decompose into pairs.
	#[error("search/replace list has odd length {len}")]
	OddSearchReplaceList {
		/// Number of strings supplied.
		len: usize,
	},
	/// CLI search/replace argument was not of the form `SEARCH=REPLACE`.
	#[error("invalid search/replace pair: {pair}")]
	InvalidPair {
		/// User-provided pair string.
		pair: String,
	},
	/// Paste mode name is not one of the host's option names.
	#[error("unknown paste mode: {name}")]
	UnknownPasteMode {
		/// Requested mode name.
		name: String,
	},
	/// Plug path is missing its node or attribute part, or names a DAG path.
	#[error("invalid plug path: {path}")]
	InvalidPlugPath {
		/// Original plug path string.
		path: String,
	},
	/// Namespace is not rooted at the requested base namespace.
	#[error("namespace {namespace} is not below {base}")]
	NotRelative {
		/// Namespace that was made relative.
		namespace: String,
		/// Requested base namespace.
		base: String,
	},
	/// Stored target plug lists and managed curves differ in count.
	#[error("connection info out of sync: {curves} curves, {entries} target entries")]
	ConnectionInfoOutOfSync {
		/// Number of managed animation curves.
		curves: usize,
		/// Number of stored target entries.
		entries: usize,
	},
	/// Source curves carry no keys to copy.
	#[error("no animation found on {curves} source curves")]
	NoAnimation {
		/// Number of queried curves.
		curves: usize,
	},
	/// Scene query for key time bounds failed.
	#[error("scene query failed: {source}")]
	SceneQuery {
		/// Underlying scene failure.
		#[source]
		source: SceneError,
	},
	/// Scene operation failed while transferring keys onto a target plug.
	#[error("scene operation failed for {target}: {source}")]
	ScenePaste {
		/// Target plug being written.
		target: String,
		/// Underlying scene failure.
		#[source]
		source: SceneError,
	},
	/// Scene refused to connect a curve to its target plug.
	#[error("scene connect failed for {target}: {source}")]
	SceneConnect {
		/// Target plug being connected.
		target: String,
		/// Underlying scene failure.
		#[source]
		source: SceneError,
	},
	/// JSON rendering failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
