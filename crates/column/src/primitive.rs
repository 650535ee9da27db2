// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use pixels_type::{Error, Result};

mod sealed {
	pub trait Sealed {}

	impl Sealed for i32 {}
	impl Sealed for i64 {}
}

/// Fixed-width on-disk representation held by a column vector buffer.
///
/// Sealed: every implementor must accept the all-zero bit pattern, which
/// the aligned buffer relies on when it hands out zeroed memory.
pub trait Primitive: sealed::Sealed + Copy + Default + PartialEq + Debug + Display + Send + Sync + 'static {
	/// Width in bytes of one encoded value
	const WIDTH: usize;

	fn from_i64(value: i64) -> Result<Self>;

	fn to_i64(self) -> i64;
}

impl Primitive for i32 {
	const WIDTH: usize = 4;

	fn from_i64(value: i64) -> Result<Self> {
		i32::try_from(value).map_err(|_| Error::out_of_range(format!("{} does not fit in a 32-bit slot", value)))
	}

	fn to_i64(self) -> i64 {
		self as i64
	}
}

impl Primitive for i64 {
	const WIDTH: usize = 8;

	fn from_i64(value: i64) -> Result<Self> {
		Ok(value)
	}

	fn to_i64(self) -> i64 {
		self
	}
}
