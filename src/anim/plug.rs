use std::fmt;

use crate::anim::{AnimError, Result, substitute_all};

/// Namespace path separator.
pub const NS_SEP: char = ':';
/// Separator between node name and attribute path.
pub const ATTR_SEP: char = '.';
/// DAG path separator; plug paths must name dependency nodes.
const DAG_SEP: char = '|';

/// Absolute namespace path such as `:rig:body`. The root namespace is `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
	/// Root namespace.
	pub fn root() -> Self {
		Self(NS_SEP.to_string())
	}

	/// Wrap a namespace name, making it absolute and dropping a trailing separator.
	///
	/// Empty input and `:` both denote the root namespace.
	pub fn new(path: &str) -> Self {
		let trimmed = path.strip_suffix(NS_SEP).filter(|rest| !rest.is_empty()).unwrap_or(path);
		if trimmed.is_empty() || trimmed == ":" {
			return Self::root();
		}
		if trimmed.starts_with(NS_SEP) {
			Self(trimmed.to_owned())
		} else {
			Self(format!("{NS_SEP}{trimmed}"))
		}
	}

	/// Absolute string form.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Whether this is the root namespace.
	pub fn is_root(&self) -> bool {
		self.0.len() == 1
	}

	/// Namespace name without the leading separator.
	pub fn to_relative(&self) -> &str {
		if self.is_root() { &self.0 } else { &self.0[NS_SEP.len_utf8()..] }
	}

	/// Parent namespace; the root is its own parent.
	pub fn parent(&self) -> Self {
		match self.0.rfind(NS_SEP) {
			Some(0) | None => Self::root(),
			Some(pos) => Self(self.0[..pos].to_owned()),
		}
	}

	/// Append a relative namespace or object name.
	pub fn join(&self, other: &str) -> String {
		join_ns(&self.0, other)
	}

	/// This namespace relative to `base`, e.g. `:a:b` relative to `:a` is `b`.
	pub fn relative_to(&self, base: &Namespace) -> Result<String> {
		let prefix = if base.is_root() { base.0.clone() } else { format!("{}{NS_SEP}", base.0) };
		match self.0.strip_prefix(&prefix) {
			Some(rest) if !rest.is_empty() => Ok(rest.to_owned()),
			_ => Err(AnimError::NotRelative {
				namespace: self.0.clone(),
				base: base.0.clone(),
			}),
		}
	}

	/// Substitute this namespace in an object or plug name with `replacement`.
	///
	/// The root namespace prefixes `replacement`. An empty replacement strips
	/// the namespace. Relative names match as if they were absolute and stay
	/// relative; duplicate separators collapse.
	pub fn substitute(&self, find_in: &str, replacement: &str) -> String {
		if self.is_root() {
			let prefix = replacement.strip_suffix(NS_SEP).unwrap_or(replacement);
			return collapse_separators(&join_ns(prefix, find_in));
		}

		let absolute = find_in.starts_with(NS_SEP);
		let haystack = if absolute { find_in.to_owned() } else { format!("{NS_SEP}{find_in}") };
		let search = format!("{}{NS_SEP}", self.0);
		let replace = format!("{NS_SEP}{}{NS_SEP}", replacement.strip_suffix(NS_SEP).unwrap_or(replacement));

		let replaced = collapse_separators(&substitute_all(&haystack, &search, &replace));
		if absolute {
			replaced
		} else {
			replaced.strip_prefix(NS_SEP).map(str::to_owned).unwrap_or(replaced)
		}
	}
}

impl fmt::Display for Namespace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Split an object name into namespace and base name at the last separator.
pub fn split_namespace(name: &str) -> (Namespace, &str) {
	match name.rfind(NS_SEP) {
		Some(pos) => (Namespace::new(&name[..pos]), &name[pos + NS_SEP.len_utf8()..]),
		None => (Namespace::root(), name),
	}
}

fn join_ns(left: &str, right: &str) -> String {
	if left.ends_with(NS_SEP) || right.starts_with(NS_SEP) {
		format!("{left}{right}")
	} else {
		format!("{left}{NS_SEP}{right}")
	}
}

fn collapse_separators(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		if ch == NS_SEP && out.ends_with(NS_SEP) {
			continue;
		}
		out.push(ch);
	}
	out
}

/// Plug path `node.attribute`, where node may carry a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlugPath {
	/// Node name including namespace.
	pub node: String,
	/// Attribute path below the node, e.g. `translate.tx` or `weights[2]`.
	pub attribute: String,
}

impl PlugPath {
	/// Split at the first attribute separator.
	pub fn parse(path: &str) -> Result<Self> {
		let invalid = || AnimError::InvalidPlugPath { path: path.to_owned() };

		if path.contains(DAG_SEP) {
			return Err(invalid());
		}
		let (node, attribute) = path.split_once(ATTR_SEP).ok_or_else(invalid)?;
		if node.is_empty() || attribute.is_empty() {
			return Err(invalid());
		}

		Ok(Self {
			node: node.to_owned(),
			attribute: attribute.to_owned(),
		})
	}

	/// Namespace and base name of the node.
	pub fn split_node(&self) -> (Namespace, &str) {
		split_namespace(&self.node)
	}

	/// Same attribute on a node whose namespace `from` is replaced by `to`.
	pub fn with_namespace(&self, from: &Namespace, to: &str) -> Self {
		Self {
			node: from.substitute(&self.node, to),
			attribute: self.attribute.clone(),
		}
	}
}

impl fmt::Display for PlugPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{ATTR_SEP}{}", self.node, self.attribute)
	}
}
