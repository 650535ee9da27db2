// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pixels_type::{
	Category, Result, TypeDescription,
	value::decimal::{parse_unscaled, render_unscaled},
};

use crate::{DEFAULT_SIZE, kind::VectorKind, typed::TypedVector};

/// Short decimals stored as 64-bit unscaled values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalKind {
	description: TypeDescription,
}

impl DecimalKind {
	/// Fails with `OutOfRange` above a precision of 18 or when the scale
	/// exceeds the precision.
	pub fn new(precision: u8, scale: u8) -> Result<Self> {
		Ok(Self {
			description: TypeDescription::decimal(precision, scale)?,
		})
	}

	pub fn precision(&self) -> u8 {
		self.description.precision()
	}

	pub fn scale(&self) -> u8 {
		self.description.scale()
	}
}

impl VectorKind for DecimalKind {
	type Native = i64;

	const ALIGNMENT: usize = 32;
	const CATEGORY: Category = Category::Decimal;

	fn description(&self) -> TypeDescription {
		self.description
	}

	fn parse(&self, text: &str) -> Result<i64> {
		parse_unscaled(text, self.scale())
	}

	fn render(&self, value: i64) -> String {
		render_unscaled(value, self.scale())
	}
}

pub type DecimalColumnVector = TypedVector<DecimalKind>;

impl TypedVector<DecimalKind> {
	pub fn new(precision: u8, scale: u8) -> Result<Self> {
		Self::with_capacity(DEFAULT_SIZE, precision, scale, true)
	}

	pub fn with_capacity(length: usize, precision: u8, scale: u8, encoding: bool) -> Result<Self> {
		Self::with_kind(length, encoding, DecimalKind::new(precision, scale)?)
	}

	pub fn precision(&self) -> u8 {
		self.kind().precision()
	}

	pub fn scale(&self) -> u8 {
		self.kind().scale()
	}
}

#[cfg(test)]
pub mod tests {
	use pixels_type::Error;

	use super::*;

	#[test]
	fn test_scaled_literals() {
		let mut vector = DecimalColumnVector::with_capacity(4, 10, 2, true).unwrap();
		vector.add_str("3.14").unwrap();
		vector.add_str("3.1").unwrap();
		vector.add_str("-0.5").unwrap();
		assert_eq!(vector.values().unwrap(), &[314, 310, -50]);
	}

	#[test]
	fn test_literal_without_point_is_stored_verbatim() {
		let mut vector = DecimalColumnVector::with_capacity(4, 10, 2, true).unwrap();
		vector.add_str("3").unwrap();
		// appended exactly once, without scaling
		assert_eq!(vector.write_index(), 1);
		assert_eq!(vector.values().unwrap(), &[3]);
	}

	#[test]
	fn test_long_fraction_is_not_truncated() {
		let mut vector = DecimalColumnVector::with_capacity(1, 10, 2, true).unwrap();
		vector.add_str("3.145").unwrap();
		assert_eq!(vector.values().unwrap(), &[3145]);
	}

	#[test]
	fn test_scenario_values() {
		let mut vector = DecimalColumnVector::with_capacity(4, 5, 2, true).unwrap();
		vector.add_str("12.3").unwrap();
		vector.add_str("0.05").unwrap();
		vector.add_str("true").unwrap();

		assert_eq!(vector.values().unwrap(), &[1230, 5, 1]);
		assert!(vector.no_nulls());
		assert!((0..3).all(|index| !vector.is_null(index)));
	}

	#[test]
	fn test_buffer_aligned_to_32() {
		let mut vector = DecimalColumnVector::with_capacity(1, 10, 2, true).unwrap();
		assert_eq!(vector.aligned_buffer().unwrap().alignment(), 32);
		assert!(vector.aligned_buffer().unwrap().is_aligned());

		vector.add_str("1.5").unwrap();
		vector.add_str("2.5").unwrap();
		assert_eq!(vector.length(), 2);
		assert_eq!(vector.aligned_buffer().unwrap().alignment(), 32);
		assert!(vector.aligned_buffer().unwrap().is_aligned());
	}

	#[test]
	fn test_precision_ceiling() {
		assert!(matches!(DecimalColumnVector::new(19, 2), Err(Error::OutOfRange { .. })));
		assert!(DecimalColumnVector::new(4, 5).is_err());
		let vector = DecimalColumnVector::new(18, 6).unwrap();
		assert_eq!((vector.precision(), vector.scale()), (18, 6));
	}

	#[test]
	fn test_malformed_literal() {
		let mut vector = DecimalColumnVector::with_capacity(1, 5, 2, true).unwrap();
		assert!(vector.add_str("1.2.3").unwrap_err().is_invalid_format());
		assert!(vector.add_str("abc").unwrap_err().is_invalid_format());
		assert_eq!(vector.write_index(), 0);
	}

	#[test]
	fn test_print_applies_scale() {
		let mut vector = DecimalColumnVector::with_capacity(3, 5, 2, true).unwrap();
		vector.add_str("12.3").unwrap();
		vector.add_null().unwrap();
		vector.add_i64(-5).unwrap();
		assert_eq!(vector.print(3).unwrap(), "12.30\nnull\n-0.05\n");
		assert!(matches!(vector.print(4), Err(Error::IndexOutOfBounds { .. })));
	}
}
