use sctl_testkit::BlobBuilder;

use crate::blob::{BlobError, DecodeWarning, PropertyValue, Value, decode, decode_key};

#[test]
fn single_occurrence_decodes_as_bare_scalar() {
	let blob = BlobBuilder::new().float("BaseStrength", 7.5).build();
	let report = decode(&blob, &["BaseStrength"]).expect("decode succeeds");

	assert!(report.warnings.is_empty());
	assert_eq!(report.properties.get("BaseStrength"), Some(&PropertyValue::Single(Value::F32(7.5))));
	assert_eq!(report.properties.get("BaseStrength").and_then(PropertyValue::as_single), Some(Value::F32(7.5)));
}

#[test]
fn repeated_key_decodes_as_sequence_in_scan_order() {
	let blob = BlobBuilder::new()
		.float("Stamina", 1.0)
		.float("Stamina", 2.0)
		.float("Stamina", 3.0)
		.build();
	let report = decode(&blob, &["Stamina"]).expect("decode succeeds");

	assert_eq!(
		report.properties.get("Stamina"),
		Some(&PropertyValue::Array(vec![Value::F32(1.0), Value::F32(2.0), Value::F32(3.0)]))
	);
	assert_eq!(report.properties.get("Stamina").and_then(PropertyValue::as_single), None);
}

#[test]
fn missing_key_is_a_warning_not_an_error() {
	let blob = BlobBuilder::new().float("BaseStrength", 7.5).build();
	let report = decode(&blob, &["NoSuchKey", "BaseStrength"]).expect("decode succeeds");

	assert!(report.properties.get("NoSuchKey").is_none());
	assert_eq!(report.properties.len(), 1);
	assert_eq!(report.warnings, vec![DecodeWarning::NoOccurrences { key: "NoSuchKey".to_owned() }]);
	assert!(report.warnings[0].to_string().contains("NoSuchKey"));
}

#[test]
fn out_of_bounds_occurrence_is_skipped_with_warning() {
	let mut blob = BlobBuilder::new().float("HeartRate", 60.0).float("HeartRate", 72.0).build();
	blob.truncate(blob.len() - 1);
	let (value, warnings) = decode_key(&blob, "HeartRate");

	assert_eq!(value, Some(PropertyValue::Single(Value::F32(60.0))));
	assert_eq!(warnings.len(), 1);
	assert!(matches!(warnings[0], DecodeWarning::ValueOutOfBounds { index: 1, width: 4, .. }));
}

#[test]
fn all_occurrences_unreadable_omits_key() {
	let mut blob = BlobBuilder::new().int64("TimeOfDeath", 5).build();
	blob.truncate(blob.len() - 4);
	let report = decode(&blob, &["TimeOfDeath"]).expect("decode succeeds");

	assert!(report.properties.is_empty());
	assert_eq!(report.warnings.len(), 1);
	assert_eq!(report.warnings[0].key(), "TimeOfDeath");
}

#[test]
fn large_64_bit_integers_stay_exact() {
	let signed = i64::MAX - 1;
	let unsigned = (1_u64 << 53) + 1;
	let blob = BlobBuilder::new().int64("Signed", signed).uint64("Unsigned", unsigned).build();
	let report = decode(&blob, &["Signed", "Unsigned"]).expect("decode succeeds");

	assert_eq!(report.properties.get("Signed"), Some(&PropertyValue::Single(Value::I64(signed))));
	assert_eq!(report.properties.get("Unsigned"), Some(&PropertyValue::Single(Value::U64(unsigned))));
}

#[test]
fn entries_follow_request_order() {
	let blob = BlobBuilder::new().bool("IsDead", false).float("Stamina", 1.0).build();
	let report = decode(&blob, &["Stamina", "IsDead", "Stamina"]).expect("decode succeeds");

	let names: Vec<&str> = report.properties.iter().map(|entry| &*entry.name).collect();
	assert_eq!(names, vec!["Stamina", "IsDead"]);
}

#[test]
fn empty_key_is_rejected_without_partial_result() {
	let blob = BlobBuilder::new().float("Stamina", 1.0).build();
	let err = decode(&blob, &["Stamina", ""]).expect_err("empty key is malformed input");
	assert!(matches!(err, BlobError::InvalidInput { .. }));
}
