// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pixels_column::{AnyColumnVector, DEFAULT_SIZE, DateColumnVector, DecimalColumnVector, TimestampColumnVector};
use pixels_testing::init_tracing;
use pixels_type::{Date, Error, Timestamp, TypeDescription};

#[test]
fn test_default_capacity() {
	init_tracing();
	assert_eq!(DateColumnVector::new().unwrap().length(), DEFAULT_SIZE);
	assert_eq!(TimestampColumnVector::new().unwrap().length(), DEFAULT_SIZE);
	assert_eq!(DecimalColumnVector::new(18, 2).unwrap().length(), DEFAULT_SIZE);
}

#[test]
fn test_batch_doubles_past_default() {
	init_tracing();
	let mut vector = DateColumnVector::new().unwrap();
	for day in 0..(DEFAULT_SIZE as i32 + 1) {
		vector.add_i32(day).unwrap();
	}
	assert_eq!(vector.length(), DEFAULT_SIZE * 2);
	assert_eq!(vector.write_index(), DEFAULT_SIZE + 1);
	assert_eq!(vector.get(DEFAULT_SIZE).unwrap(), Some(DEFAULT_SIZE as i32));
}

#[test]
fn test_values_match_value_types() {
	init_tracing();
	let mut dates = DateColumnVector::with_capacity(1, true).unwrap();
	dates.add_str("2024-2-29").unwrap();
	assert_eq!(dates.get(0).unwrap(), Some(Date::from_ymd(2024, 2, 29).unwrap().to_days_since_epoch()));

	let mut timestamps = TimestampColumnVector::with_capacity(1, true).unwrap();
	timestamps.add_str("2024-2-29 13:45:30").unwrap();
	let expected = Timestamp::from_ymd_hms(2024, 2, 29, 13, 45, 30).unwrap();
	assert_eq!(timestamps.get(0).unwrap(), Some(expected.to_micros_since_epoch()));
}

#[test]
fn test_nulls_read_back_as_none() {
	init_tracing();
	let mut vector = DecimalColumnVector::with_capacity(2, 5, 2, true).unwrap();
	vector.add_null().unwrap();
	vector.add_str("1.25").unwrap();

	assert!(!vector.no_nulls());
	assert_eq!(vector.get(0).unwrap(), None);
	assert_eq!(vector.get(1).unwrap(), Some(125));
	assert!(matches!(vector.get(2), Err(Error::IndexOutOfBounds { .. })));
}

#[test]
fn test_any_vector_from_text_description() {
	init_tracing();
	let description: TypeDescription = "DATE".parse().unwrap();
	let mut vector = AnyColumnVector::create(&description, 1, true).unwrap();
	vector.add_str("1970-1-1").unwrap();
	vector.add_str("1969-12-31").unwrap();
	assert_eq!(vector.print(2).unwrap(), "1970-01-01\n1969-12-31\n");
}
