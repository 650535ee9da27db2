// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pixels_type::{Category, Result, TypeDescription};

use crate::{
	DateColumnVector, DecimalColumnVector, TimestampColumnVector, date::DateKind, decimal::DecimalKind,
	kind::VectorKind, timestamp::TimestampKind,
};

/// A column vector whose type is only known at runtime, built from a
/// [`TypeDescription`].
#[derive(Debug)]
pub enum AnyColumnVector {
	Date(DateColumnVector),
	Timestamp(TimestampColumnVector),
	Decimal(DecimalColumnVector),
}

impl AnyColumnVector {
	pub fn create(description: &TypeDescription, length: usize, encoding: bool) -> Result<Self> {
		Ok(match description.category() {
			Category::Date => AnyColumnVector::Date(DateColumnVector::with_kind(length, encoding, DateKind)?),
			Category::Timestamp => AnyColumnVector::Timestamp(TimestampColumnVector::with_kind(
				length,
				encoding,
				TimestampKind::new(description.precision())?,
			)?),
			Category::Decimal => AnyColumnVector::Decimal(DecimalColumnVector::with_kind(
				length,
				encoding,
				DecimalKind::new(description.precision(), description.scale())?,
			)?),
		})
	}

	pub fn category(&self) -> Category {
		match self {
			AnyColumnVector::Date(_) => Category::Date,
			AnyColumnVector::Timestamp(_) => Category::Timestamp,
			AnyColumnVector::Decimal(_) => Category::Decimal,
		}
	}

	pub fn type_description(&self) -> TypeDescription {
		match self {
			AnyColumnVector::Date(vector) => vector.kind().description(),
			AnyColumnVector::Timestamp(vector) => vector.kind().description(),
			AnyColumnVector::Decimal(vector) => vector.kind().description(),
		}
	}

	pub fn length(&self) -> usize {
		match self {
			AnyColumnVector::Date(vector) => vector.length(),
			AnyColumnVector::Timestamp(vector) => vector.length(),
			AnyColumnVector::Decimal(vector) => vector.length(),
		}
	}

	pub fn write_index(&self) -> usize {
		match self {
			AnyColumnVector::Date(vector) => vector.write_index(),
			AnyColumnVector::Timestamp(vector) => vector.write_index(),
			AnyColumnVector::Decimal(vector) => vector.write_index(),
		}
	}

	pub fn is_null(&self, index: usize) -> bool {
		match self {
			AnyColumnVector::Date(vector) => vector.is_null(index),
			AnyColumnVector::Timestamp(vector) => vector.is_null(index),
			AnyColumnVector::Decimal(vector) => vector.is_null(index),
		}
	}

	pub fn add_str(&mut self, text: &str) -> Result<()> {
		match self {
			AnyColumnVector::Date(vector) => vector.add_str(text),
			AnyColumnVector::Timestamp(vector) => vector.add_str(text),
			AnyColumnVector::Decimal(vector) => vector.add_str(text),
		}
	}

	pub fn add_i64(&mut self, value: i64) -> Result<()> {
		match self {
			AnyColumnVector::Date(vector) => vector.add_i64(value),
			AnyColumnVector::Timestamp(vector) => vector.add_i64(value),
			AnyColumnVector::Decimal(vector) => vector.add_i64(value),
		}
	}

	pub fn add_null(&mut self) -> Result<()> {
		match self {
			AnyColumnVector::Date(vector) => vector.add_null(),
			AnyColumnVector::Timestamp(vector) => vector.add_null(),
			AnyColumnVector::Decimal(vector) => vector.add_null(),
		}
	}

	pub fn print(&self, row_count: usize) -> Result<String> {
		match self {
			AnyColumnVector::Date(vector) => vector.print(row_count),
			AnyColumnVector::Timestamp(vector) => vector.print(row_count),
			AnyColumnVector::Decimal(vector) => vector.print(row_count),
		}
	}

	pub fn reset(&mut self) -> Result<()> {
		match self {
			AnyColumnVector::Date(vector) => vector.reset(),
			AnyColumnVector::Timestamp(vector) => vector.reset(),
			AnyColumnVector::Decimal(vector) => vector.reset(),
		}
	}

	pub fn close(&mut self) {
		match self {
			AnyColumnVector::Date(vector) => vector.close(),
			AnyColumnVector::Timestamp(vector) => vector.close(),
			AnyColumnVector::Decimal(vector) => vector.close(),
		}
	}
}
