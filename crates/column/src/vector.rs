// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem::align_of;

use pixels_type::{Error, Result};
use tracing::trace;

/// Row count, cursors and null flags shared by every typed column vector.
///
/// Invariants: `write_index <= length` and `is_null.len() == length` for as
/// long as the vector is open. A closed vector owns nothing.
#[derive(Debug)]
pub struct ColumnVector {
	length: usize,
	write_index: usize,
	read_index: usize,
	is_null: Vec<bool>,
	no_nulls: bool,
	memory_usage: u64,
	encoding: bool,
	closed: bool,
}

impl ColumnVector {
	pub fn new(length: usize, encoding: bool) -> Self {
		Self {
			length,
			write_index: 0,
			read_index: 0,
			is_null: vec![false; length],
			no_nulls: true,
			memory_usage: length as u64,
			encoding,
			closed: false,
		}
	}

	pub fn length(&self) -> usize {
		self.length
	}

	pub fn write_index(&self) -> usize {
		self.write_index
	}

	pub fn read_index(&self) -> usize {
		self.read_index
	}

	pub fn no_nulls(&self) -> bool {
		self.no_nulls
	}

	pub fn memory_usage(&self) -> u64 {
		self.memory_usage
	}

	pub fn encoding(&self) -> bool {
		self.encoding
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	/// Null flag of `index`; slots past the capacity read as not null.
	pub fn is_null(&self, index: usize) -> bool {
		self.is_null.get(index).copied().unwrap_or(false)
	}

	pub fn nulls(&self) -> &[bool] {
		&self.is_null
	}

	pub(crate) fn check_open(&self) -> Result<()> {
		if self.closed {
			Err(Error::Closed)
		} else {
			Ok(())
		}
	}

	pub(crate) fn check_index(&self, index: usize) -> Result<()> {
		if index < self.length {
			Ok(())
		} else {
			Err(Error::IndexOutOfBounds {
				index,
				length: self.length,
			})
		}
	}

	/// Capacity an append at the current write position has to grow to
	pub(crate) fn append_capacity(&self) -> Option<usize> {
		if self.write_index >= self.length {
			Some((self.write_index * 2).max(1))
		} else {
			None
		}
	}

	/// Reserves room for `size` null flags without changing any state
	pub(crate) fn reserve(&mut self, size: usize) -> Result<()> {
		let additional = size.saturating_sub(self.is_null.len());
		self.is_null.try_reserve_exact(additional).map_err(|_| Error::AllocationFailed {
			elements: size,
			alignment: align_of::<bool>(),
		})
	}

	/// Generic half of a resize: grows the null flags to `size` slots.
	/// The typed buffer is reallocated afterwards and [`ColumnVector::resize`]
	/// commits the new length.
	pub(crate) fn ensure_size(&mut self, size: usize, preserve_data: bool) {
		if self.length >= size {
			return;
		}
		if !preserve_data {
			self.is_null.iter_mut().for_each(|flag| *flag = false);
			self.no_nulls = true;
		}
		self.is_null.resize(size, false);
	}

	pub(crate) fn add_memory(&mut self, bytes: u64) {
		self.memory_usage += bytes;
	}

	/// Commits a grown capacity of `size` elements, `element_width` bytes each
	pub(crate) fn resize(&mut self, size: usize, element_width: usize) {
		let delta = size.saturating_sub(self.length) as u64;
		self.memory_usage += delta * (1 + element_width as u64);
		trace!(from = self.length, to = size, bytes = delta * (1 + element_width as u64), "column vector resized");
		self.length = size;
	}

	/// Marks `index` as holding a value and advances the write cursor past it
	pub(crate) fn mark_valid(&mut self, index: usize) {
		if index >= self.write_index {
			self.write_index = index + 1;
		}
		self.is_null[index] = false;
	}

	pub(crate) fn mark_null(&mut self, index: usize) {
		if index >= self.write_index {
			self.write_index = index + 1;
		}
		self.is_null[index] = true;
		self.no_nulls = false;
	}

	pub(crate) fn increment_read_index(&mut self, count: usize) {
		self.read_index = self.read_index.saturating_add(count);
	}

	pub(crate) fn reset(&mut self) {
		self.write_index = 0;
		self.read_index = 0;
		self.is_null.iter_mut().for_each(|flag| *flag = false);
		self.no_nulls = true;
	}

	pub(crate) fn close(&mut self) {
		if !self.closed {
			self.is_null = Vec::new();
			self.closed = true;
		}
	}
}
