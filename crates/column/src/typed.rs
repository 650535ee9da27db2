// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use pixels_type::{Error, Result};
use tracing::{debug, trace};

use crate::{buffer::AlignedBuffer, kind::VectorKind, primitive::Primitive, vector::ColumnVector};

/// A column vector holding one aligned buffer of `K::Native` values next to
/// the shared null/cursor state.
///
/// With `encoding == false` no buffer is allocated: the vector only tracks
/// nulls and every value access reports [`Error::NoBuffer`].
#[derive(Debug)]
pub struct TypedVector<K: VectorKind> {
	base: ColumnVector,
	values: Option<AlignedBuffer<K::Native>>,
	kind: K,
}

impl<K: VectorKind> TypedVector<K> {
	pub fn with_kind(length: usize, encoding: bool, kind: K) -> Result<Self> {
		let values = if encoding {
			Some(AlignedBuffer::new(length, K::ALIGNMENT)?)
		} else {
			None
		};

		let mut base = ColumnVector::new(length, encoding);
		if values.is_some() {
			base.add_memory((length * K::Native::WIDTH) as u64);
		}

		Ok(Self {
			base,
			values,
			kind,
		})
	}

	pub fn kind(&self) -> &K {
		&self.kind
	}

	pub fn base(&self) -> &ColumnVector {
		&self.base
	}

	pub fn length(&self) -> usize {
		self.base.length()
	}

	pub fn write_index(&self) -> usize {
		self.base.write_index()
	}

	pub fn read_index(&self) -> usize {
		self.base.read_index()
	}

	pub fn memory_usage(&self) -> u64 {
		self.base.memory_usage()
	}

	pub fn is_null(&self, index: usize) -> bool {
		self.base.is_null(index)
	}

	pub fn no_nulls(&self) -> bool {
		self.base.no_nulls()
	}

	pub fn is_closed(&self) -> bool {
		self.base.is_closed()
	}

	pub fn has_buffer(&self) -> bool {
		self.values.is_some()
	}

	fn buffer(&self) -> Result<&AlignedBuffer<K::Native>> {
		self.base.check_open()?;
		self.values.as_ref().ok_or(Error::NoBuffer)
	}

	#[cfg(test)]
	pub(crate) fn aligned_buffer(&self) -> Option<&AlignedBuffer<K::Native>> {
		self.values.as_ref()
	}

	fn buffer_mut(&mut self) -> Result<&mut AlignedBuffer<K::Native>> {
		self.base.check_open()?;
		self.values.as_mut().ok_or(Error::NoBuffer)
	}

	/// Grows the vector to at least `size` slots. With `preserve_data` the
	/// first `length` values and null flags survive the reallocation.
	pub fn ensure_size(&mut self, size: usize, preserve_data: bool) -> Result<()> {
		self.base.check_open()?;
		let length = self.base.length();
		if length >= size {
			return Ok(());
		}

		// allocate first so a failed allocation leaves the vector untouched
		self.base.reserve(size)?;
		let width = match self.values.as_mut() {
			Some(values) => {
				let preserve = if preserve_data {
					length
				} else {
					0
				};
				values.grow(size, preserve)?;
				K::Native::WIDTH
			}
			None => 0,
		};
		self.base.ensure_size(size, preserve_data);
		self.base.resize(size, width);
		Ok(())
	}

	/// Writes `value` into `index`, clears its null flag and advances the
	/// write cursor when `index` lies at or past it.
	pub fn set(&mut self, index: usize, value: K::Native) -> Result<()> {
		self.base.check_open()?;
		self.base.check_index(index)?;
		self.buffer_mut()?.as_mut_slice()[index] = value;
		self.base.mark_valid(index);
		Ok(())
	}

	pub fn set_null(&mut self, index: usize) -> Result<()> {
		self.base.check_open()?;
		self.base.check_index(index)?;
		self.base.mark_null(index);
		Ok(())
	}

	fn append(&mut self, value: K::Native) -> Result<()> {
		self.buffer()?;
		if let Some(size) = self.base.append_capacity() {
			self.ensure_size(size, true)?;
		}
		let index = self.base.write_index();
		self.set(index, value)
	}

	pub fn add_bool(&mut self, value: bool) -> Result<()> {
		self.add_i32(if value {
			1
		} else {
			0
		})
	}

	pub fn add_i32(&mut self, value: i32) -> Result<()> {
		self.add_i64(value as i64)
	}

	pub fn add_i64(&mut self, value: i64) -> Result<()> {
		let value = K::Native::from_i64(value)?;
		self.append(value)
	}

	/// Appends a textual value. `true` and `false` (any case) append 1 and 0;
	/// anything else goes through the type's own grammar. A rejected literal
	/// leaves the vector unchanged.
	pub fn add_str(&mut self, text: &str) -> Result<()> {
		self.base.check_open()?;
		let literal = text.trim();
		let value = if literal.eq_ignore_ascii_case("true") {
			K::Native::from_i64(1)?
		} else if literal.eq_ignore_ascii_case("false") {
			K::Native::from_i64(0)?
		} else {
			self.kind.parse(text)?
		};
		self.append(value)
	}

	pub fn add_null(&mut self) -> Result<()> {
		self.base.check_open()?;
		if let Some(size) = self.base.append_capacity() {
			self.ensure_size(size, true)?;
		}
		let index = self.base.write_index();
		self.base.mark_null(index);
		Ok(())
	}

	/// The value under the read cursor, or `None` when the vector has no
	/// buffer or the cursor has run past the capacity. Does not advance.
	pub fn current(&self) -> Result<Option<&K::Native>> {
		self.base.check_open()?;
		Ok(self.values.as_ref().and_then(|values| values.as_slice().get(self.base.read_index())))
	}

	pub fn increment_read_index(&mut self, count: usize) -> Result<()> {
		self.base.check_open()?;
		self.base.increment_read_index(count);
		Ok(())
	}

	/// The written prefix `[0, write_index)` of the buffer, nulls included
	pub fn values(&self) -> Result<&[K::Native]> {
		let write_index = self.base.write_index();
		Ok(&self.buffer()?.as_slice()[..write_index])
	}

	pub fn get(&self, index: usize) -> Result<Option<K::Native>> {
		let values = self.values()?;
		let value = values.get(index).ok_or(Error::IndexOutOfBounds {
			index,
			length: values.len(),
		})?;
		if self.base.is_null(index) {
			Ok(None)
		} else {
			Ok(Some(*value))
		}
	}

	/// Renders the first `row_count` slots one per line
	pub fn print(&self, row_count: usize) -> Result<String> {
		self.base.check_open()?;
		if !K::PRINTABLE {
			return Err(Error::Unsupported {
				operation: "print",
				type_name: K::CATEGORY.name(),
			});
		}
		let values = self.buffer()?.as_slice();
		if row_count > values.len() {
			return Err(Error::IndexOutOfBounds {
				index: row_count,
				length: values.len(),
			});
		}

		let mut out = String::new();
		for (index, value) in values[..row_count].iter().enumerate() {
			if self.base.is_null(index) {
				out.push_str("null\n");
			} else {
				out.push_str(&self.kind.render(*value));
				out.push('\n');
			}
		}
		Ok(out)
	}

	/// Rewinds both cursors and clears every null flag. Capacity is kept.
	pub fn reset(&mut self) -> Result<()> {
		self.base.check_open()?;
		self.base.reset();
		Ok(())
	}

	/// Releases the buffer. Closing twice is a no-op.
	pub fn close(&mut self) {
		if self.base.is_closed() {
			return;
		}
		self.values = None;
		self.base.close();
		debug!(category = %K::CATEGORY, memory_usage = self.base.memory_usage(), "column vector closed");
	}
}

impl<K: VectorKind> Drop for TypedVector<K> {
	fn drop(&mut self) {
		if !self.base.is_closed() {
			trace!(category = %K::CATEGORY, "closing column vector on drop");
			self.close();
		}
	}
}
