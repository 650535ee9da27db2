// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Column writers for the Pixels columnar format.
//!
//! A writer encodes the rows of a typed column vector as fixed-width values
//! in the configured byte order, either skipping nulls or padding them with
//! zeros, and records a pixel boundary every `pixel_stride` elements.

pub mod chunk;
pub mod encoding;
pub mod option;
pub mod stream;
pub mod writer;

pub use chunk::{ColumnChunkIndex, PixelEntry};
pub use encoding::{FixedWidth, write_int_be, write_int_le, write_long_be, write_long_le};
pub use option::{ByteOrder, WriterOption};
pub use stream::{IoOutputStream, MemoryOutputStream, OutputStream};
pub use writer::{ColumnWriter, DateColumnWriter, DecimalColumnWriter, TimestampColumnWriter};
