// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// One closed pixel of a column chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelEntry {
	/// Offset from the chunk start right after the pixel's last byte
	pub end_position: u64,
	/// Logical elements the pixel covers, nulls included
	pub elements: usize,
}

/// Pixel boundaries recorded while a column chunk is written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnChunkIndex {
	pixels: Vec<PixelEntry>,
}

impl ColumnChunkIndex {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, end_position: u64, elements: usize) {
		self.pixels.push(PixelEntry {
			end_position,
			elements,
		});
	}

	pub fn pixels(&self) -> &[PixelEntry] {
		&self.pixels
	}

	pub fn len(&self) -> usize {
		self.pixels.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pixels.is_empty()
	}

	pub fn positions(&self) -> impl Iterator<Item = u64> + '_ {
		self.pixels.iter().map(|pixel| pixel.end_position)
	}

	/// Byte length of every pixel, derived from consecutive end positions
	pub fn pixel_sizes(&self) -> Vec<u64> {
		let mut start = 0;
		self.pixels
			.iter()
			.map(|pixel| {
				let size = pixel.end_position.saturating_sub(start);
				start = pixel.end_position;
				size
			})
			.collect()
	}
}
