// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pixels_type::{
	Category, Result, Timestamp, TypeDescription, description::DEFAULT_TIMESTAMP_PRECISION,
	value::temporal::parse_timestamp,
};

use crate::{DEFAULT_SIZE, kind::VectorKind, typed::TypedVector};

/// Timestamps stored as 64-bit microsecond counts from 1970-01-01T00:00:00.
/// The precision is carried along for the type description only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampKind {
	description: TypeDescription,
}

impl TimestampKind {
	pub fn new(precision: u8) -> Result<Self> {
		Ok(Self {
			description: TypeDescription::timestamp(precision)?,
		})
	}

	pub fn precision(&self) -> u8 {
		self.description.precision()
	}
}

impl VectorKind for TimestampKind {
	type Native = i64;

	const ALIGNMENT: usize = 64;
	const CATEGORY: Category = Category::Timestamp;
	const PRINTABLE: bool = false;

	fn description(&self) -> TypeDescription {
		self.description
	}

	fn parse(&self, text: &str) -> Result<i64> {
		Ok(parse_timestamp(text)?.to_micros_since_epoch())
	}

	fn render(&self, value: i64) -> String {
		Timestamp::from_micros_since_epoch(value).to_string()
	}
}

pub type TimestampColumnVector = TypedVector<TimestampKind>;

impl TypedVector<TimestampKind> {
	pub fn new() -> Result<Self> {
		Self::with_capacity(DEFAULT_SIZE, true)
	}

	pub fn with_capacity(length: usize, encoding: bool) -> Result<Self> {
		Self::with_precision(length, DEFAULT_TIMESTAMP_PRECISION, encoding)
	}

	pub fn with_precision(length: usize, precision: u8, encoding: bool) -> Result<Self> {
		Self::with_kind(length, encoding, TimestampKind::new(precision)?)
	}

	pub fn precision(&self) -> u8 {
		self.kind().precision()
	}

	pub fn add_timestamp(&mut self, timestamp: Timestamp) -> Result<()> {
		self.add_i64(timestamp.to_micros_since_epoch())
	}
}
