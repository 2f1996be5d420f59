use super::*;

#[test]
fn empty_search_is_noop() {
	assert_eq!(substitute_all("pSphere1.tx", "", "X"), "pSphere1.tx");
	assert_eq!(substitute_all("", "", ""), "");
}

#[test]
fn missing_search_leaves_input() {
	assert_eq!(substitute_all("ref:node.rotateX", "zz", "Q"), "ref:node.rotateX");
	assert_eq!(substitute_all("short", "much longer needle", "Q"), "short");
}

#[test]
fn dotted_paths_replace_every_separator() {
	assert_eq!(substitute_all("a.b c.d e.f", ".", "_"), "a_b c_d e_f");
}

#[test]
fn repeated_first_char_is_non_overlapping() {
	assert_eq!(substitute_all("aabbaab", "aa", "X"), "XbbXb");
	assert_eq!(substitute_all("aaa", "aa", "X"), "Xa");
	assert_eq!(substitute_all("aaaa", "aa", "X"), "XX");
	assert_eq!(substitute_all("ababab", "aba", "-"), "-bab");
}

#[test]
fn matches_at_both_boundaries() {
	assert_eq!(substitute_all("ns:body:ns", "ns", "rig"), "rig:body:rig");
	assert_eq!(substitute_all("ns", "ns", "rig"), "rig");
}

#[test]
fn empty_replace_deletes_matches() {
	assert_eq!(substitute_all("ref:arm_L.tx,ref:arm_R.tx", "ref:", ""), "arm_L.tx,arm_R.tx");
}

#[test]
fn search_longer_than_trailing_fragment() {
	assert_eq!(substitute_all("xx:a", ":abc", "!"), "xx:a");
	assert_eq!(substitute_all("a:b:", ":b:c", "!"), "a:b:");
}

#[test]
fn multibyte_first_char() {
	assert_eq!(substitute_all("α1 αβ αβγ", "αβ", "Z"), "α1 Z Zγ");
}

#[test]
fn sentinel_in_input_falls_back_to_naive() {
	let input = format!("a{SENTINEL}a");
	assert_eq!(substitute_all(&input, "a", "b"), format!("b{SENTINEL}b"));
}

#[test]
fn agrees_with_naive_replace() {
	let inputs = ["", "a", "aa", "aaaaa", "abcabcab", "ns:ns:nsns:", ":::", "a.b..c...d", "xaxaxaxax"];
	let searches = ["a", "aa", "aaa", "ab", "aba", "ns:", "::", "..", "xax", ":", "b"];
	for input in inputs {
		for search in searches {
			assert_eq!(substitute_all(input, search, "<>"), input.replace(search, "<>"), "input={input:?} search={search:?}");
		}
	}
}

#[test]
fn spec_applies_pairs_in_order() {
	let spec = SearchReplaceSpec::from_pairs([("src:", "tmp:"), ("tmp:", "dst:")]);
	assert_eq!(spec.apply("src:hand.tx"), "dst:hand.tx");
	assert!(!spec.is_empty());
}

#[test]
fn flat_spec_requires_even_length() {
	let spec = SearchReplaceSpec::from_flat(&["a", "b", "c", "d"]).expect("even list parses");
	assert_eq!(spec.pairs.len(), 2);
	assert_eq!(spec.apply("abcd"), "bbdd");

	let err = SearchReplaceSpec::from_flat(&["a", "b", "c"]).expect_err("odd list fails");
	assert!(matches!(err, AnimError::OddSearchReplaceList { len: 3 }));
}
