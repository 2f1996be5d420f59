use serde::Serialize;
use tracing::debug;

use crate::anim::{AnimError, Result};

/// Boundary marker wrapped around the input on the fast path.
///
/// Inputs, search or replace strings containing it take the naive path.
const SENTINEL: char = '\u{e000}';

/// Replace every non-overlapping occurrence of `search` in `input`.
///
/// Matches are found leftmost first, like [`str::replace`]. Dense matches of a
/// short `search` are handled by splitting once on its first character and
/// testing each fragment for a leading match, so long connection strings do
/// not get rescanned per substitution. An empty `search` returns `input`.
pub fn substitute_all(input: &str, search: &str, replace: &str) -> String {
	let Some(first) = search.chars().next() else {
		return input.to_owned();
	};

	if input.contains(SENTINEL) || search.contains(SENTINEL) || replace.contains(SENTINEL) {
		debug!(search, "sentinel present, using naive substitution");
		return input.replace(search, replace);
	}

	let wrapped = format!("{SENTINEL}{input}{SENTINEL}");
	let fragments: Vec<&str> = wrapped.split(first).collect();

	// Always holds for `str::split`; kept as a cheap guard on the fragment invariant.
	let mut separator = [0_u8; 4];
	let separator = first.encode_utf8(&mut separator);
	if fragments.join(&*separator) != wrapped {
		debug!(search, "split does not round-trip, using naive substitution");
		return input.replace(search, replace);
	}

	let spans_fragments = search[first.len_utf8()..].contains(first);
	let mut out = String::with_capacity(wrapped.len());
	out.push_str(fragments[0]);

	let mut idx = 1_usize;
	while idx < fragments.len() {
		let mut piece = String::with_capacity(first.len_utf8() + fragments[idx].len());
		piece.push(first);
		piece.push_str(fragments[idx]);

		if piece.len() >= search.len() || !spans_fragments {
			if let Some(rest) = piece.strip_prefix(search) {
				out.push_str(replace);
				out.push_str(rest);
			} else {
				out.push_str(&piece);
			}
			idx += 1;
			continue;
		}

		// `search` repeats its first character, absorb following fragments until
		// the joined text is long enough to hold it.
		let mut joined = piece.clone();
		let mut last = idx;
		while joined.len() < search.len() && last + 1 < fragments.len() {
			last += 1;
			joined.push(first);
			joined.push_str(fragments[last]);
		}

		match joined.strip_prefix(search) {
			Some(rest) => {
				out.push_str(replace);
				out.push_str(rest);
				idx = last + 1;
			}
			None => {
				out.push_str(&piece);
				idx += 1;
			}
		}
	}

	let trimmed = out.strip_prefix(SENTINEL).unwrap_or(&out);
	trimmed.strip_suffix(SENTINEL).unwrap_or(trimmed).to_owned()
}

/// One search/replace step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReplace {
	/// Text to look for.
	pub search: String,
	/// Text substituted for every match.
	pub replace: String,
}

/// Ordered search/replace steps, each applied to the output of the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchReplaceSpec {
	/// Steps in application order.
	pub pairs: Vec<SearchReplace>,
}

impl SearchReplaceSpec {
	/// Build from explicit `(search, replace)` pairs.
	pub fn from_pairs<I, S, R>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (S, R)>,
		S: Into<String>,
		R: Into<String>,
	{
		Self {
			pairs: pairs
				.into_iter()
				.map(|(search, replace)| SearchReplace {
					search: search.into(),
					replace: replace.into(),
				})
				.collect(),
		}
	}

	/// Build from a flat `search, replace, search, replace, ..` list.
	pub fn from_flat<S: AsRef<str>>(items: &[S]) -> Result<Self> {
		if items.len() % 2 != 0 {
			return Err(AnimError::OddSearchReplaceList { len: items.len() });
		}

		Ok(Self::from_pairs(items.chunks_exact(2).map(|pair| (pair[0].as_ref(), pair[1].as_ref()))))
	}

	/// Append one step.
	pub fn push(&mut self, search: impl Into<String>, replace: impl Into<String>) {
		self.pairs.push(SearchReplace {
			search: search.into(),
			replace: replace.into(),
		});
	}

	/// Whether no steps are configured.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Run every step over `input` in order.
	pub fn apply(&self, input: &str) -> String {
		self.pairs
			.iter()
			.fold(input.to_owned(), |acc, pair| substitute_all(&acc, &pair.search, &pair.replace))
	}
}

#[cfg(test)]
mod tests;
