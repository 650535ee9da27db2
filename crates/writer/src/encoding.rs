// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pixels_type::Result;

use crate::{option::ByteOrder, stream::OutputStream};

pub fn write_int_le<S: OutputStream + ?Sized>(out: &mut S, value: i32) -> Result<()> {
	out.write_bytes(&value.to_le_bytes())
}

pub fn write_int_be<S: OutputStream + ?Sized>(out: &mut S, value: i32) -> Result<()> {
	out.write_bytes(&value.to_be_bytes())
}

pub fn write_long_le<S: OutputStream + ?Sized>(out: &mut S, value: i64) -> Result<()> {
	out.write_bytes(&value.to_le_bytes())
}

pub fn write_long_be<S: OutputStream + ?Sized>(out: &mut S, value: i64) -> Result<()> {
	out.write_bytes(&value.to_be_bytes())
}

/// A primitive with a fixed on-disk width
pub trait FixedWidth: Copy {
	const ZERO: Self;

	fn write_to<S: OutputStream + ?Sized>(self, out: &mut S, order: ByteOrder) -> Result<()>;
}

impl FixedWidth for i32 {
	const ZERO: Self = 0;

	fn write_to<S: OutputStream + ?Sized>(self, out: &mut S, order: ByteOrder) -> Result<()> {
		match order {
			ByteOrder::LittleEndian => write_int_le(out, self),
			ByteOrder::BigEndian => write_int_be(out, self),
		}
	}
}

impl FixedWidth for i64 {
	const ZERO: Self = 0;

	fn write_to<S: OutputStream + ?Sized>(self, out: &mut S, order: ByteOrder) -> Result<()> {
		match order {
			ByteOrder::LittleEndian => write_long_le(out, self),
			ByteOrder::BigEndian => write_long_be(out, self),
		}
	}
}
