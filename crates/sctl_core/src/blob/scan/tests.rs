use sctl_testkit::BlobBuilder;

use crate::blob::{KEY_PADDING, PropertyType, VALUE_PADDING, find_occurrences};

#[test]
fn resolves_value_offset_from_padding_constants() {
	let blob = BlobBuilder::new().raw(b"\x01\x02header").float("BaseStrength", 7.5).build();
	let occurrences = find_occurrences(&blob, "BaseStrength");

	assert_eq!(occurrences.len(), 1);
	let occ = occurrences[0];
	assert_eq!(occ.property_type, PropertyType::Float);
	assert_eq!(occ.key_offset, 8);
	assert_eq!(occ.value_offset, 8 + "BaseStrength".len() + KEY_PADDING + "FloatProperty".len() + VALUE_PADDING);
	assert_eq!(occ.value_end(), blob.len());
}

#[test]
fn repeated_keys_are_found_in_scan_order() {
	let blob = BlobBuilder::new()
		.float("Stamina", 1.0)
		.int("Other", 3)
		.float("Stamina", 2.0)
		.float("Stamina", 3.0)
		.build();
	let occurrences = find_occurrences(&blob, "Stamina");

	assert_eq!(occurrences.len(), 3);
	assert!(occurrences.windows(2).all(|pair| pair[0].value_end() <= pair[1].key_offset));
}

#[test]
fn unknown_type_is_skipped_and_scan_continues() {
	let blob = BlobBuilder::new()
		.property("Name", "StrProperty", b"\x05\x00\x00\x00abcd\x00")
		.int("Name", 42)
		.build();
	let occurrences = find_occurrences(&blob, "Name");

	assert_eq!(occurrences.len(), 1);
	assert_eq!(occurrences[0].property_type, PropertyType::Int32);
}

#[test]
fn prefix_key_does_not_resolve_onto_longer_key() {
	let blob = BlobBuilder::new().float("StaminaMax", 10.0).float("Stamina", 4.0).build();
	let occurrences = find_occurrences(&blob, "Stamina");

	assert_eq!(occurrences.len(), 1);
	assert_eq!(PropertyType::Float.read(&blob, occurrences[0].value_offset), Some(4.0_f32.into()));
}

#[test]
fn unterminated_type_name_stops_scan() {
	let mut blob = BlobBuilder::new().float("Stamina", 1.0).build();
	blob.extend_from_slice(b"Stamina\0\x0e\x00\x00\x00FloatProp");
	blob.extend_from_slice(&BlobBuilder::new().float("Stamina", 2.0).build().into_iter().filter(|b| *b != 0).collect::<Vec<_>>());

	let occurrences = find_occurrences(&blob, "Stamina");
	assert_eq!(occurrences.len(), 1, "only the record before the unterminated type name counts");
}

#[test]
fn key_at_end_of_blob_yields_nothing() {
	let blob = b"prefix bytes Stamina".to_vec();
	assert!(find_occurrences(&blob, "Stamina").is_empty());
}

#[test]
fn empty_key_matches_nothing() {
	let blob = BlobBuilder::new().float("Stamina", 1.0).build();
	assert!(find_occurrences(&blob, "").is_empty());
}

#[test]
fn truncated_value_is_still_reported_as_occurrence() {
	let mut blob = BlobBuilder::new().double("BodyTemperature", 36.6).build();
	blob.truncate(blob.len() - 3);
	let occurrences = find_occurrences(&blob, "BodyTemperature");

	assert_eq!(occurrences.len(), 1);
	assert!(occurrences[0].value_end() > blob.len());
}

#[test]
fn key_bytes_inside_another_value_are_reported() {
	let embedded = BlobBuilder::new().float("Stamina", 9.0).build();
	let blob = BlobBuilder::new()
		.property("LastMessage", "StrProperty", &embedded)
		.float("Stamina", 4.0)
		.build();
	let occurrences = find_occurrences(&blob, "Stamina");

	assert_eq!(occurrences.len(), 2, "string payload that looks like a record is matched");
	assert_eq!(PropertyType::Float.read(&blob, occurrences[0].value_offset), Some(9.0_f32.into()));
	assert_eq!(PropertyType::Float.read(&blob, occurrences[1].value_offset), Some(4.0_f32.into()));
	assert!(occurrences[0].value_end() < occurrences[1].key_offset);
}
