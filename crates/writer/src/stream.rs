// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{io, io::Write};

use pixels_type::Result;

/// Append-only byte sink a column writer encodes into
pub trait OutputStream {
	fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

	/// Absolute number of bytes written so far
	fn write_pos(&self) -> u64;

	fn flush(&mut self) -> Result<()> {
		Ok(())
	}
}

impl<S: OutputStream + ?Sized> OutputStream for &mut S {
	fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		(**self).write_bytes(bytes)
	}

	fn write_pos(&self) -> u64 {
		(**self).write_pos()
	}

	fn flush(&mut self) -> Result<()> {
		(**self).flush()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryOutputStream {
	buffer: Vec<u8>,
}

impl MemoryOutputStream {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.buffer
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.buffer
	}
}

impl OutputStream for MemoryOutputStream {
	fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		self.buffer.extend_from_slice(bytes);
		Ok(())
	}

	fn write_pos(&self) -> u64 {
		self.buffer.len() as u64
	}
}

/// Counts the bytes passed through to any [`Write`]. I/O failures surface
/// unchanged as `Error::Io`.
#[derive(Debug)]
pub struct IoOutputStream<W: Write> {
	inner: W,
	position: u64,
}

impl<W: Write> IoOutputStream<W> {
	pub fn new(inner: W) -> Self {
		Self {
			inner,
			position: 0,
		}
	}

	pub fn get_ref(&self) -> &W {
		&self.inner
	}

	pub fn into_inner(self) -> W {
		self.inner
	}
}

impl<W: Write> OutputStream for IoOutputStream<W> {
	/// Counts every byte the sink accepted, including those of a write that
	/// fails part way.
	fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		let mut remaining = bytes;
		while !remaining.is_empty() {
			match self.inner.write(remaining) {
				Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero).into()),
				Ok(written) => {
					self.position += written as u64;
					remaining = &remaining[written..];
				}
				Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
				Err(err) => return Err(err.into()),
			}
		}
		Ok(())
	}

	fn write_pos(&self) -> u64 {
		self.position
	}

	fn flush(&mut self) -> Result<()> {
		self.inner.flush()?;
		Ok(())
	}
}
