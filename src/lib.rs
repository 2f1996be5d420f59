//! Public library API for remapping keyframe animation between scenes and namespaces.

/// String substitution, time-range policy, namespace handling, and paste orchestration.
pub mod anim;
