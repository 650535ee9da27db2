// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory column vectors for the Pixels columnar format.
//!
//! Every vector owns one zero-initialised buffer aligned to 32 or 64 bytes
//! and a parallel array of null flags. Appends double the capacity when the
//! write cursor reaches it; values are stored in their on-disk form (day
//! counts, epoch microseconds, unscaled decimals).

pub mod any;
pub mod buffer;
pub mod date;
pub mod decimal;
pub mod kind;
pub mod primitive;
pub mod timestamp;
pub mod typed;
pub mod vector;

pub use any::AnyColumnVector;
pub use buffer::AlignedBuffer;
pub use date::{DateColumnVector, DateKind};
pub use decimal::{DecimalColumnVector, DecimalKind};
pub use kind::VectorKind;
pub use primitive::Primitive;
pub use timestamp::{TimestampColumnVector, TimestampKind};
pub use typed::TypedVector;
pub use vector::ColumnVector;

/// Default capacity of a column vector, one row batch
pub const DEFAULT_SIZE: usize = 1024;
