// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pixels_type::{Error, Result};
use serde::{Deserialize, Serialize};

/// Byte order of the fixed-width values a writer emits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
	#[default]
	LittleEndian,
	BigEndian,
}

/// Options shared by every column writer of one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOption {
	/// Number of elements per pixel. A pixel boundary is signalled each time
	/// this many elements have been counted.
	pub pixel_stride: usize,
	/// Emit a zero of the value's width for every null instead of skipping it
	pub nulls_padding: bool,
	pub byte_order: ByteOrder,
}

impl Default for WriterOption {
	fn default() -> Self {
		Self {
			pixel_stride: 10_000,
			nulls_padding: false,
			byte_order: ByteOrder::LittleEndian,
		}
	}
}

impl WriterOption {
	pub fn with_pixel_stride(mut self, pixel_stride: usize) -> Self {
		self.pixel_stride = pixel_stride;
		self
	}

	pub fn with_nulls_padding(mut self, nulls_padding: bool) -> Self {
		self.nulls_padding = nulls_padding;
		self
	}

	pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
		self.byte_order = byte_order;
		self
	}

	/// Reads options from JSON; absent fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		let option: WriterOption =
			serde_json::from_str(json).map_err(|err| Error::invalid_config(err.to_string()))?;
		option.validate()?;
		Ok(option)
	}

	pub fn validate(&self) -> Result<()> {
		if self.pixel_stride == 0 {
			return Err(Error::invalid_config("pixel_stride must be greater than zero"));
		}
		Ok(())
	}
}
