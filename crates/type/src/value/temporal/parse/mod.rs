// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod date;
pub mod timestamp;

use crate::{Error, FormatKind, Result};

/// Cursor over a trimmed temporal literal. Every failure is reported against
/// the whole input so callers see what they passed in.
pub(crate) struct Scanner<'a> {
	input: &'a str,
	bytes: &'a [u8],
	pos: usize,
	kind: FormatKind,
	expected: &'static str,
}

impl<'a> Scanner<'a> {
	pub(crate) fn new(input: &'a str, kind: FormatKind, expected: &'static str) -> Self {
		let trimmed = input.trim();
		Self {
			input: trimmed,
			bytes: trimmed.as_bytes(),
			pos: 0,
			kind,
			expected,
		}
	}

	pub(crate) fn error(&self, message: impl Into<String>) -> Error {
		Error::invalid_format(self.kind, self.input, format!("{}, expected {}", message.into(), self.expected))
	}

	fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	/// An optionally signed decimal integer
	pub(crate) fn signed(&mut self, field: &str) -> Result<i64> {
		let negative = match self.peek() {
			Some(b'-') => {
				self.pos += 1;
				true
			}
			Some(b'+') => {
				self.pos += 1;
				false
			}
			_ => false,
		};
		let value = self.unsigned(field)? as i64;
		Ok(if negative {
			-value
		} else {
			value
		})
	}

	pub(crate) fn unsigned(&mut self, field: &str) -> Result<u32> {
		let (value, _) = self.digits(field)?;
		u32::try_from(value).map_err(|_| self.error(format!("{} is too large", field)))
	}

	/// Returns the parsed digits and how many of them there were
	pub(crate) fn digits(&mut self, field: &str) -> Result<(u64, usize)> {
		let start = self.pos;
		let mut value: u64 = 0;
		while let Some(b) = self.peek() {
			if !b.is_ascii_digit() {
				break;
			}
			value = value
				.checked_mul(10)
				.and_then(|v| v.checked_add((b - b'0') as u64))
				.ok_or_else(|| self.error(format!("{} is too large", field)))?;
			self.pos += 1;
		}
		if self.pos == start {
			return Err(self.error(format!("missing {}", field)));
		}
		Ok((value, self.pos - start))
	}

	pub(crate) fn expect(&mut self, separator: u8) -> Result<()> {
		match self.peek() {
			Some(b) if b == separator => {
				self.pos += 1;
				Ok(())
			}
			Some(b) => Err(self.error(format!("unexpected '{}' where '{}' was expected", b as char, separator as char))),
			None => Err(self.error(format!("missing '{}'", separator as char))),
		}
	}

	pub(crate) fn consume(&mut self, separator: u8) -> bool {
		if self.peek() == Some(separator) {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	pub(crate) fn finish(&self) -> Result<()> {
		if self.pos == self.bytes.len() {
			Ok(())
		} else {
			Err(self.error(format!("trailing characters '{}'", &self.input[self.pos..])))
		}
	}
}
