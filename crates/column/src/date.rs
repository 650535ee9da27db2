// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pixels_type::{Category, Date, Result, TypeDescription, value::temporal::parse_date};

use crate::{DEFAULT_SIZE, kind::VectorKind, typed::TypedVector};

/// Dates stored as 32-bit day counts from 1970-01-01
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateKind;

impl VectorKind for DateKind {
	type Native = i32;

	const ALIGNMENT: usize = 32;
	const CATEGORY: Category = Category::Date;

	fn description(&self) -> TypeDescription {
		TypeDescription::date()
	}

	fn parse(&self, text: &str) -> Result<i32> {
		Ok(parse_date(text)?.to_days_since_epoch())
	}

	fn render(&self, value: i32) -> String {
		Date::from_days_since_epoch(value).to_string()
	}
}

pub type DateColumnVector = TypedVector<DateKind>;

impl TypedVector<DateKind> {
	pub fn new() -> Result<Self> {
		Self::with_capacity(DEFAULT_SIZE, true)
	}

	pub fn with_capacity(length: usize, encoding: bool) -> Result<Self> {
		Self::with_kind(length, encoding, DateKind)
	}

	/// Appends an already converted calendar date
	pub fn add_date(&mut self, date: Date) -> Result<()> {
		self.add_i32(date.to_days_since_epoch())
	}
}

#[cfg(test)]
pub mod tests {
	use pixels_type::Error;

	use super::*;

	#[test]
	fn test_epoch_round_trip() {
		let mut vector = DateColumnVector::with_capacity(4, true).unwrap();
		vector.add_str("1970-1-1").unwrap();
		vector.add_str("1970-1-2").unwrap();
		vector.add_str("1969-12-31").unwrap();
		assert_eq!(vector.values().unwrap(), &[0, 1, -1]);
	}

	#[test]
	fn test_boolean_literals() {
		let mut vector = DateColumnVector::with_capacity(2, true).unwrap();
		vector.add_str("TRUE").unwrap();
		vector.add_str("False").unwrap();
		assert_eq!(vector.values().unwrap(), &[1, 0]);
	}

	#[test]
	fn test_invalid_literal_leaves_vector_unchanged() {
		let mut vector = DateColumnVector::with_capacity(2, true).unwrap();
		vector.add_str("2024-03-01").unwrap();

		let err = vector.add_str("2024/03/02").unwrap_err();
		assert!(err.is_invalid_format());
		assert!(vector.add_str("2024-02-30").unwrap_err().is_invalid_format());

		assert_eq!(vector.write_index(), 1);
		assert_eq!(vector.values().unwrap(), &[19783]);
	}

	#[test]
	fn test_wide_integer_is_narrowed() {
		let mut vector = DateColumnVector::with_capacity(1, true).unwrap();
		assert!(matches!(vector.add_i64(i64::MAX), Err(Error::OutOfRange { .. })));
		assert_eq!(vector.write_index(), 0);
	}

	#[test]
	fn test_print() {
		let mut vector = DateColumnVector::with_capacity(3, true).unwrap();
		vector.add_date(Date::from_ymd(2024, 2, 29).unwrap()).unwrap();
		vector.add_null().unwrap();
		vector.add_str("1970-1-1").unwrap();
		assert_eq!(vector.print(3).unwrap(), "2024-02-29\nnull\n1970-01-01\n");
	}

	#[test]
	fn test_buffer_aligned_to_32() {
		let mut vector = DateColumnVector::with_capacity(1, true).unwrap();
		assert_eq!(vector.aligned_buffer().unwrap().alignment(), 32);
		assert!(vector.aligned_buffer().unwrap().is_aligned());

		vector.add_i32(1).unwrap();
		vector.add_i32(2).unwrap();
		assert_eq!(vector.length(), 2);
		assert_eq!(vector.aligned_buffer().unwrap().alignment(), 32);
		assert!(vector.aligned_buffer().unwrap().is_aligned());
	}

	#[test]
	fn test_default_capacity_memory() {
		let vector = DateColumnVector::new().unwrap();
		assert_eq!(vector.length(), DEFAULT_SIZE);
		assert_eq!(vector.memory_usage(), (DEFAULT_SIZE * 5) as u64);
	}
}
