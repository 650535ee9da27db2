// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	alloc::{Layout, alloc_zeroed, dealloc},
	fmt,
	fmt::Debug,
	mem::align_of,
	ptr::{self, NonNull},
	slice,
};

use pixels_type::{Error, Result};

use crate::primitive::Primitive;

/// A fixed-capacity, zero-initialised buffer of primitives whose start
/// address is aligned to a caller chosen boundary (32 or 64 bytes for the
/// column vectors). Capacity only changes through [`AlignedBuffer::grow`].
pub struct AlignedBuffer<T: Primitive> {
	ptr: NonNull<T>,
	capacity: usize,
	alignment: usize,
}

// The buffer exclusively owns its allocation
unsafe impl<T: Primitive + Send> Send for AlignedBuffer<T> {}
unsafe impl<T: Primitive + Sync> Sync for AlignedBuffer<T> {}

impl<T: Primitive> AlignedBuffer<T> {
	pub fn new(capacity: usize, alignment: usize) -> Result<Self> {
		let layout = Self::layout(capacity, alignment)?;
		let ptr = Self::allocate(layout, capacity)?;
		Ok(Self {
			ptr,
			capacity,
			alignment,
		})
	}

	fn layout(capacity: usize, alignment: usize) -> Result<Layout> {
		let failed = || Error::AllocationFailed {
			elements: capacity,
			alignment,
		};
		// a zero sized layout must not reach the allocator
		Layout::array::<T>(capacity.max(1))
			.and_then(|layout| layout.align_to(alignment.max(align_of::<T>())))
			.map_err(|_| failed())
	}

	fn allocate(layout: Layout, capacity: usize) -> Result<NonNull<T>> {
		// all-zero bits are a valid value for every Primitive
		let raw = unsafe { alloc_zeroed(layout) };
		NonNull::new(raw as *mut T).ok_or(Error::AllocationFailed {
			elements: capacity,
			alignment: layout.align(),
		})
	}

	/// Reallocates to `capacity` elements, copying the first `preserve`
	/// elements of the old allocation. Slots past `preserve` start zeroed.
	/// On failure the buffer is left untouched.
	pub fn grow(&mut self, capacity: usize, preserve: usize) -> Result<()> {
		let layout = Self::layout(capacity, self.alignment)?;
		let ptr = Self::allocate(layout, capacity)?;

		let preserve = preserve.min(self.capacity).min(capacity);
		unsafe {
			ptr::copy_nonoverlapping(self.ptr.as_ptr(), ptr.as_ptr(), preserve);
			self.release();
		}

		self.ptr = ptr;
		self.capacity = capacity;
		Ok(())
	}

	unsafe fn release(&mut self) {
		// the layout was validated when this allocation was made
		if let Ok(layout) = Self::layout(self.capacity, self.alignment) {
			unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn alignment(&self) -> usize {
		self.alignment
	}

	pub fn is_aligned(&self) -> bool {
		(self.ptr.as_ptr() as usize).is_multiple_of(self.alignment)
	}

	pub fn as_slice(&self) -> &[T] {
		unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
	}
}

impl<T: Primitive> Drop for AlignedBuffer<T> {
	fn drop(&mut self) {
		unsafe { self.release() };
	}
}

impl<T: Primitive> Debug for AlignedBuffer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AlignedBuffer")
			.field("capacity", &self.capacity)
			.field("alignment", &self.alignment)
			.field("data", &self.as_slice())
			.finish()
	}
}
