// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::marker::PhantomData;

use pixels_column::{DateKind, DecimalKind, TimestampKind, TypedVector, VectorKind};
use pixels_type::{Error, Result, TypeDescription};
use tracing::{debug, instrument, trace};

use crate::{
	chunk::ColumnChunkIndex,
	encoding::FixedWidth,
	option::{ByteOrder, WriterOption},
	stream::{MemoryOutputStream, OutputStream},
};

/// Encodes the values of one column into an output stream, one fixed-width
/// slot per value, and cuts the stream into pixels of `pixel_stride`
/// elements.
///
/// Every row advances the pixel element counter, nulls included, but a
/// boundary is only checked after a non-null value has been emitted.
#[derive(Debug)]
pub struct ColumnWriter<K: VectorKind, S: OutputStream = MemoryOutputStream> {
	description: TypeDescription,
	output: S,
	byte_order: ByteOrder,
	nulls_padding: bool,
	pixel_stride: usize,
	has_null: bool,
	cur_pixel_ele_index: usize,
	chunk_start: u64,
	chunk_index: ColumnChunkIndex,
	closed: bool,
	_kind: PhantomData<K>,
}

pub type DateColumnWriter<S = MemoryOutputStream> = ColumnWriter<DateKind, S>;
pub type TimestampColumnWriter<S = MemoryOutputStream> = ColumnWriter<TimestampKind, S>;
pub type DecimalColumnWriter<S = MemoryOutputStream> = ColumnWriter<DecimalKind, S>;

impl<K: VectorKind> ColumnWriter<K, MemoryOutputStream> {
	pub fn in_memory(description: TypeDescription, option: &WriterOption) -> Result<Self> {
		Self::new(description, option, MemoryOutputStream::new())
	}
}

impl<K: VectorKind, S: OutputStream> ColumnWriter<K, S> {
	pub fn new(description: TypeDescription, option: &WriterOption, output: S) -> Result<Self> {
		option.validate()?;
		if description.category() != K::CATEGORY {
			return Err(Error::TypeMismatch {
				expected: K::CATEGORY.to_string(),
				actual: description.to_string(),
			});
		}

		let chunk_start = output.write_pos();
		debug!(
			column_type = %description,
			pixel_stride = option.pixel_stride,
			nulls_padding = option.nulls_padding,
			byte_order = ?option.byte_order,
			"column writer created"
		);

		Ok(Self {
			description,
			output,
			byte_order: option.byte_order,
			nulls_padding: Self::decide_nulls_padding(option),
			pixel_stride: option.pixel_stride,
			has_null: false,
			cur_pixel_ele_index: 0,
			chunk_start,
			chunk_index: ColumnChunkIndex::new(),
			closed: false,
			_kind: PhantomData,
		})
	}

	/// Fixed-width types pad nulls exactly when the options ask for it
	pub fn decide_nulls_padding(option: &WriterOption) -> bool {
		option.nulls_padding
	}

	pub fn type_description(&self) -> &TypeDescription {
		&self.description
	}

	pub fn byte_order(&self) -> ByteOrder {
		self.byte_order
	}

	pub fn nulls_padding(&self) -> bool {
		self.nulls_padding
	}

	pub fn pixel_stride(&self) -> usize {
		self.pixel_stride
	}

	/// True once any null has been written, for the writer's whole lifetime
	pub fn has_null(&self) -> bool {
		self.has_null
	}

	pub fn cur_pixel_ele_index(&self) -> usize {
		self.cur_pixel_ele_index
	}

	pub fn column_chunk_index(&self) -> &ColumnChunkIndex {
		&self.chunk_index
	}

	/// Bytes written by this writer
	pub fn column_chunk_size(&self) -> u64 {
		self.output.write_pos() - self.chunk_start
	}

	pub fn output(&self) -> &S {
		&self.output
	}

	pub fn into_output(self) -> S {
		self.output
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	fn check_open(&self) -> Result<()> {
		if self.closed {
			Err(Error::Closed)
		} else {
			Ok(())
		}
	}

	/// Closes the current pixel
	fn new_pixel(&mut self) {
		let end_position = self.column_chunk_size();
		trace!(position = end_position, elements = self.cur_pixel_ele_index, "pixel boundary");
		self.chunk_index.push(end_position, self.cur_pixel_ele_index);
		self.cur_pixel_ele_index = 0;
	}

	/// Closes a trailing partial pixel and flushes the stream. Returns the
	/// column chunk size in bytes.
	#[instrument(name = "writer::column::flush", level = "trace", skip(self))]
	pub fn flush(&mut self) -> Result<u64> {
		self.check_open()?;
		if self.cur_pixel_ele_index > 0 {
			self.new_pixel();
		}
		self.output.flush()?;
		Ok(self.column_chunk_size())
	}

	/// Flushes the stream and rejects further writes. Closing twice is a no-op.
	pub fn close(&mut self) -> Result<()> {
		if self.closed {
			return Ok(());
		}
		self.closed = true;
		debug!(column_type = %self.description, bytes = self.column_chunk_size(), "column writer closed");
		self.output.flush()
	}
}

impl<K, S> ColumnWriter<K, S>
where
	K: VectorKind,
	K::Native: FixedWidth,
	S: OutputStream,
{
	/// Encodes rows `[0, size)` of `vector` and returns the stream's write
	/// position afterwards.
	#[instrument(name = "writer::column::write", level = "trace", skip(self, vector))]
	pub fn write(&mut self, vector: &TypedVector<K>, size: usize) -> Result<u64> {
		self.check_open()?;

		let description = vector.kind().description();
		if description != self.description {
			return Err(Error::TypeMismatch {
				expected: self.description.to_string(),
				actual: description.to_string(),
			});
		}
		if size > vector.write_index() {
			return Err(Error::IndexOutOfBounds {
				index: size,
				length: vector.write_index(),
			});
		}

		let values = vector.values()?;
		for (index, value) in values[..size].iter().enumerate() {
			self.cur_pixel_ele_index += 1;
			if vector.is_null(index) {
				self.has_null = true;
				if self.nulls_padding {
					K::Native::ZERO.write_to(&mut self.output, self.byte_order)?;
				}
			} else {
				value.write_to(&mut self.output, self.byte_order)?;
				if self.cur_pixel_ele_index >= self.pixel_stride {
					self.new_pixel();
				}
			}
		}

		Ok(self.output.write_pos())
	}
}

#[cfg(test)]
pub mod tests {
	use pixels_column::{DateColumnVector, DecimalColumnVector, TimestampColumnVector};

	use super::*;

	fn decimals(rows: &[Option<i64>]) -> DecimalColumnVector {
		let mut vector = DecimalColumnVector::with_capacity(rows.len(), 10, 2, true).unwrap();
		for row in rows {
			match row {
				Some(value) => vector.add_i64(*value).unwrap(),
				None => vector.add_null().unwrap(),
			}
		}
		vector
	}

	fn decimal_writer(option: &WriterOption) -> DecimalColumnWriter {
		DecimalColumnWriter::in_memory(TypeDescription::decimal(10, 2).unwrap(), option).unwrap()
	}

	#[test]
	fn test_nulls_padding_enabled() {
		let vector = decimals(&[Some(10), None, Some(20)]);
		let mut writer = decimal_writer(&WriterOption::default().with_nulls_padding(true));

		assert_eq!(writer.write(&vector, 3).unwrap(), 24);
		assert!(writer.has_null());
		assert_eq!(&writer.output().as_bytes()[8..16], &[0; 8]);
	}

	#[test]
	fn test_nulls_padding_disabled() {
		let vector = decimals(&[Some(10), None, Some(20)]);
		let mut writer = decimal_writer(&WriterOption::default());

		assert_eq!(writer.write(&vector, 3).unwrap(), 16);
		assert!(writer.has_null());
		assert_eq!(&writer.output().as_bytes()[8..], &20i64.to_le_bytes());
	}

	#[test]
	fn test_has_null_is_sticky() {
		let mut writer = decimal_writer(&WriterOption::default());
		writer.write(&decimals(&[None]), 1).unwrap();
		writer.write(&decimals(&[Some(1), Some(2)]), 2).unwrap();
		assert!(writer.has_null());
	}

	#[test]
	fn test_pixel_boundaries() {
		let vector = decimals(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);
		let mut writer = decimal_writer(&WriterOption::default().with_pixel_stride(2));

		writer.write(&vector, 5).unwrap();
		assert_eq!(writer.column_chunk_index().positions().collect::<Vec<_>>(), vec![16, 32]);
		assert_eq!(writer.cur_pixel_ele_index(), 1);

		assert_eq!(writer.flush().unwrap(), 40);
		assert_eq!(writer.column_chunk_index().len(), 3);
		assert_eq!(writer.column_chunk_index().pixels()[2].elements, 1);
	}

	#[test]
	fn test_unpadded_nulls_advance_counter() {
		// the null counts toward the stride but the boundary waits for a value
		let vector = decimals(&[Some(1), None, Some(3), Some(4)]);
		let mut writer = decimal_writer(&WriterOption::default().with_pixel_stride(2));

		writer.write(&vector, 4).unwrap();
		assert_eq!(writer.column_chunk_index().len(), 1);
		assert_eq!(writer.cur_pixel_ele_index(), 1);

		writer.flush().unwrap();
		let pixels = writer.column_chunk_index().pixels();
		assert_eq!((pixels[0].end_position, pixels[0].elements), (16, 3));
		assert_eq!((pixels[1].end_position, pixels[1].elements), (24, 1));
	}

	#[test]
	fn test_trailing_null_does_not_close_pixel() {
		let vector = decimals(&[Some(1), None]);
		let mut writer = decimal_writer(&WriterOption::default().with_pixel_stride(2).with_nulls_padding(true));

		writer.write(&vector, 2).unwrap();
		assert!(writer.column_chunk_index().is_empty());
		assert_eq!(writer.cur_pixel_ele_index(), 2);
	}

	#[test]
	fn test_big_endian() {
		let vector = decimals(&[Some(1230)]);
		let mut writer = decimal_writer(&WriterOption::default().with_byte_order(ByteOrder::BigEndian));
		writer.write(&vector, 1).unwrap();
		assert_eq!(writer.into_output().into_bytes(), 1230i64.to_be_bytes().to_vec());
	}

	#[test]
	fn test_date_width() {
		let mut vector = DateColumnVector::with_capacity(2, true).unwrap();
		vector.add_str("1970-1-2").unwrap();
		vector.add_null().unwrap();

		let option = WriterOption::default().with_nulls_padding(true);
		let mut writer = DateColumnWriter::in_memory(TypeDescription::date(), &option).unwrap();
		assert_eq!(writer.write(&vector, 2).unwrap(), 8);
		assert_eq!(writer.output().as_bytes(), &[1, 0, 0, 0, 0, 0, 0, 0]);
	}

	#[test]
	fn test_timestamp_width() {
		let mut vector = TimestampColumnVector::with_capacity(1, true).unwrap();
		vector.add_str("1970-1-1 00:00:01").unwrap();

		let description = TypeDescription::timestamp(6).unwrap();
		let mut writer = TimestampColumnWriter::in_memory(description, &WriterOption::default()).unwrap();
		assert_eq!(writer.write(&vector, 1).unwrap(), 8);
		assert_eq!(writer.output().as_bytes(), &1_000_000i64.to_le_bytes());
	}

	#[test]
	fn test_partial_batch() {
		let vector = decimals(&[Some(1), Some(2), Some(3)]);
		let mut writer = decimal_writer(&WriterOption::default());
		assert_eq!(writer.write(&vector, 2).unwrap(), 16);
		assert!(matches!(
			writer.write(&vector, 4),
			Err(Error::IndexOutOfBounds {
				index: 4,
				length: 3
			})
		));
	}

	#[test]
	fn test_type_mismatch() {
		let option = WriterOption::default();
		assert!(matches!(
			DecimalColumnWriter::in_memory(TypeDescription::date(), &option),
			Err(Error::TypeMismatch { .. })
		));

		let mut writer = decimal_writer(&option);
		let other = DecimalColumnVector::with_capacity(1, 5, 2, true).unwrap();
		assert!(matches!(writer.write(&other, 0), Err(Error::TypeMismatch { .. })));
	}

	#[test]
	fn test_invalid_option() {
		let option = WriterOption::default().with_pixel_stride(0);
		assert!(matches!(decimal_writer_result(&option), Err(Error::InvalidConfig { .. })));
	}

	fn decimal_writer_result(option: &WriterOption) -> Result<DecimalColumnWriter> {
		DecimalColumnWriter::in_memory(TypeDescription::decimal(10, 2).unwrap(), option)
	}

	#[test]
	fn test_close() {
		let vector = decimals(&[Some(1)]);
		let mut writer = decimal_writer(&WriterOption::default());
		writer.write(&vector, 1).unwrap();

		writer.close().unwrap();
		writer.close().unwrap();

		assert!(writer.is_closed());
		assert!(matches!(writer.write(&vector, 1), Err(Error::Closed)));
		assert!(matches!(writer.flush(), Err(Error::Closed)));
		assert_eq!(writer.column_chunk_size(), 8);
	}

	#[test]
	fn test_chunk_relative_to_stream_start() {
		let mut output = MemoryOutputStream::new();
		output.write_bytes(&[0xaa; 4]).unwrap();

		let option = WriterOption::default().with_pixel_stride(1);
		let mut writer = DecimalColumnWriter::new(TypeDescription::decimal(10, 2).unwrap(), &option, output).unwrap();

		assert_eq!(writer.write(&decimals(&[Some(7)]), 1).unwrap(), 12);
		assert_eq!(writer.column_chunk_size(), 8);
		assert_eq!(writer.column_chunk_index().positions().collect::<Vec<_>>(), vec![8]);
	}
}
