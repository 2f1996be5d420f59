use super::*;

fn approx(left: f64, right: f64) -> bool {
	(left - right).abs() < 1e-9
}

#[test]
fn single_pose_source_forces_replace_and_schedules_delete() {
	let result = resolve_remap("1012:1012", "", PasteMode::Replace, 1000.0, 1020.0);

	let source = result.source.expect("source range kept");
	assert!(approx(source.width().expect("closed range"), 0.01));
	assert_eq!(result.mode, PasteMode::Replace);
	assert!(result.deletes_helper_key());
	assert!(approx(result.delete_at.expect("delete scheduled"), 1012.01));
	assert_eq!(result.target, TargetTime::Natural);
}

#[test]
fn single_target_frame_expands_to_source_width() {
	let result = resolve_remap("1001:1015", "1004", PasteMode::FitReplace, 1001.0, 1015.0);

	assert_eq!(result.target.to_string(), "1004:1018");
	assert_eq!(result.mode, PasteMode::FitReplace);
	assert!(!result.deletes_helper_key());
}

#[test]
fn insert_and_merge_paste_at_point() {
	let insert = resolve_remap("1001:1015", "1004", PasteMode::Insert, 1001.0, 1015.0);
	assert_eq!(insert.target, TargetTime::At(1004.0));

	let merge = resolve_remap("1001:1015", "1004", PasteMode::Merge, 1001.0, 1015.0);
	assert_eq!(merge.target, TargetTime::At(1004.0));
}

#[test]
fn first_and_last_select_single_keys() {
	let first = resolve_remap("first", "", PasteMode::FitInsert, 10.0, 40.0);
	let source = first.source.expect("first key range");
	assert_eq!(source.start, Some(10.0));
	assert!(approx(source.end.expect("nudged end"), 10.01));
	assert_eq!(first.mode, PasteMode::Replace);

	let last = resolve_remap("last", "100", PasteMode::Insert, 10.0, 40.0);
	assert_eq!(last.source.and_then(|range| range.start), Some(40.0));
	assert!(approx(last.delete_at.expect("delete scheduled"), 100.01));
	assert_eq!(last.mode, PasteMode::Replace);
	let TargetTime::Span(span) = last.target else {
		panic!("expected widened target span");
	};
	assert_eq!(span.start, Some(100.0));
	assert!(approx(span.end.expect("span end"), 100.01));
}

#[test]
fn single_pose_scene_without_explicit_range() {
	let result = resolve_remap("", "", PasteMode::FitInsert, 24.0, 24.0);

	let source = result.source.expect("synthesized range");
	assert_eq!(source.start, Some(24.0));
	assert!(approx(source.end.expect("nudged end"), 24.01));
	assert_eq!(result.mode, PasteMode::Replace);
	assert!(approx(result.delete_at.expect("delete scheduled"), 24.01));
}

#[test]
fn natural_range_keeps_mode() {
	let result = resolve_remap("", "", PasteMode::ScaleMerge, 1.0, 50.0);

	assert_eq!(result.source, None);
	assert_eq!(result.target, TargetTime::Natural);
	assert_eq!(result.mode, PasteMode::ScaleMerge);
	assert_eq!(result.delete_at, None);
}

#[test]
fn open_source_range_uses_key_bounds_for_width() {
	let result = resolve_remap("20:", "0", PasteMode::FitReplace, 1.0, 50.0);
	assert_eq!(result.target, TargetTime::Span(TimeRange::closed(0.0, 30.0)));

	let natural = resolve_remap("", "100", PasteMode::Replace, 1.0, 50.0);
	assert_eq!(natural.target, TargetTime::Span(TimeRange::closed(100.0, 149.0)));
}

#[test]
fn explicit_target_range_is_passed_through() {
	let result = resolve_remap("1:10", "100:200", PasteMode::ScaleReplace, 1.0, 10.0);
	assert_eq!(result.target, TargetTime::Span(TimeRange::closed(100.0, 200.0)));

	let empty = resolve_remap("1:10", ":", PasteMode::ScaleReplace, 1.0, 10.0);
	assert_eq!(empty.target, TargetTime::Natural);
}

#[test]
fn unparseable_target_degrades_to_natural() {
	let result = resolve_remap("1:10", "later", PasteMode::Replace, 1.0, 10.0);
	assert_eq!(result.target, TargetTime::Natural);
}

#[test]
fn malformed_source_keeps_documented_fallback() {
	let result = resolve_remap("43:as2:32df:4", "", PasteMode::FitInsert, 1.0, 100.0);
	assert_eq!(result.source, Some(TimeRange::new(Some(43.0), None)));
	assert_eq!(result.mode, PasteMode::FitInsert);
}

#[test]
fn custom_epsilon_widens_single_pose() {
	let options = RemapOptions { epsilon: 0.5 };
	let result = resolve_remap_with("5:5", "", PasteMode::Insert, 0.0, 10.0, &options);

	assert_eq!(result.source, Some(TimeRange::closed(5.0, 5.5)));
	assert_eq!(result.delete_at, Some(5.5));
	assert_eq!(result.target.start(), None);
}
