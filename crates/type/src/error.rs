// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	io,
};

/// The grammar a rejected textual value was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
	Date,
	Timestamp,
	Decimal,
	Integer,
	Type,
}

impl Display for FormatKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			FormatKind::Date => f.write_str("date"),
			FormatKind::Timestamp => f.write_str("timestamp"),
			FormatKind::Decimal => f.write_str("decimal"),
			FormatKind::Integer => f.write_str("integer"),
			FormatKind::Type => f.write_str("type"),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid {kind} format '{input}': {message}")]
	InvalidFormat {
		kind: FormatKind,
		input: String,
		message: String,
	},

	#[error("{operation} is not supported for {type_name}")]
	Unsupported {
		operation: &'static str,
		type_name: &'static str,
	},

	#[error("failed to allocate {elements} elements aligned to {alignment}")]
	AllocationFailed {
		elements: usize,
		alignment: usize,
	},

	#[error("column vector or writer is closed")]
	Closed,

	#[error("value out of range: {message}")]
	OutOfRange {
		message: String,
	},

	#[error("index {index} is out of bounds for length {length}")]
	IndexOutOfBounds {
		index: usize,
		length: usize,
	},

	#[error("column vector has no backing buffer")]
	NoBuffer,

	#[error("type mismatch: expected {expected}, found {actual}")]
	TypeMismatch {
		expected: String,
		actual: String,
	},

	#[error("invalid configuration: {message}")]
	InvalidConfig {
		message: String,
	},

	#[error(transparent)]
	Io(#[from] io::Error),
}

impl Error {
	pub fn invalid_format(kind: FormatKind, input: &str, message: impl Into<String>) -> Self {
		Error::InvalidFormat {
			kind,
			input: input.to_string(),
			message: message.into(),
		}
	}

	pub fn out_of_range(message: impl Into<String>) -> Self {
		Error::OutOfRange {
			message: message.into(),
		}
	}

	pub fn invalid_config(message: impl Into<String>) -> Self {
		Error::InvalidConfig {
			message: message.into(),
		}
	}

	pub fn is_invalid_format(&self) -> bool {
		matches!(self, Error::InvalidFormat { .. })
	}
}

pub type Result<T> = std::result::Result<T, Error>;
