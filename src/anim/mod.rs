mod error;
mod handle;
mod plug;
mod policy;
mod range;
mod remap;
mod subst;

/// Error and result aliases.
pub use error::{AnimError, Result};
/// Stored curve-to-plug connection records.
pub use handle::{Assignment, ConnectionInfo, TARGET_SEP};
/// Plug path and namespace helpers.
pub use plug::{ATTR_SEP, NS_SEP, Namespace, PlugPath, split_namespace};
/// Remap policy resolution.
pub use policy::{FIRST_KEY, LAST_KEY, RemapOptions, RemapResult, TargetTime, resolve_remap, resolve_remap_with};
/// Time range parsing and paste modes.
pub use range::{PasteMode, RANGE_SEP, TimeRange, format_frame, parse_frame, parse_time_range};
/// Scene-driven animation paste orchestration.
pub use remap::{NoProgress, ProgressObserver, RemapReport, RemapRequest, SceneError, SceneService, apply_animation, paste_animation};
/// String substitution.
pub use subst::{SearchReplace, SearchReplaceSpec, substitute_all};
