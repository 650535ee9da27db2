// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
	Error, FormatKind, Result,
	value::decimal::{MAX_PRECISION, validate_precision_scale},
};

pub const DEFAULT_TIMESTAMP_PRECISION: u8 = 6;
pub const MAX_TIMESTAMP_PRECISION: u8 = 9;
pub const DEFAULT_DECIMAL_PRECISION: u8 = 10;
pub const DEFAULT_DECIMAL_SCALE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Date,
	Timestamp,
	Decimal,
}

impl Category {
	pub fn name(&self) -> &'static str {
		match self {
			Category::Date => "date",
			Category::Timestamp => "timestamp",
			Category::Decimal => "decimal",
		}
	}

	/// Width in bytes of one value on disk
	pub fn width(&self) -> usize {
		match self {
			Category::Date => 4,
			Category::Timestamp | Category::Decimal => 8,
		}
	}
}

impl Display for Category {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Describes the logical type of one column. Precision and scale live here,
/// out-of-band from the encoded values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeDescription {
	category: Category,
	precision: u8,
	scale: u8,
}

impl TypeDescription {
	pub fn date() -> Self {
		Self {
			category: Category::Date,
			precision: 0,
			scale: 0,
		}
	}

	pub fn timestamp(precision: u8) -> Result<Self> {
		if precision > MAX_TIMESTAMP_PRECISION {
			return Err(Error::out_of_range(format!(
				"timestamp precision {} is outside 0..={}",
				precision, MAX_TIMESTAMP_PRECISION
			)));
		}
		Ok(Self {
			category: Category::Timestamp,
			precision,
			scale: 0,
		})
	}

	pub fn decimal(precision: u8, scale: u8) -> Result<Self> {
		validate_precision_scale(precision, scale)?;
		Ok(Self {
			category: Category::Decimal,
			precision,
			scale,
		})
	}

	pub fn category(&self) -> Category {
		self.category
	}

	pub fn precision(&self) -> u8 {
		self.precision
	}

	pub fn scale(&self) -> u8 {
		self.scale
	}
}

impl Display for TypeDescription {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.category {
			Category::Date => f.write_str("date"),
			Category::Timestamp => write!(f, "timestamp({})", self.precision),
			Category::Decimal => write!(f, "decimal({},{})", self.precision, self.scale),
		}
	}
}

impl FromStr for TypeDescription {
	type Err = Error;

	/// Accepts `date`, `timestamp`, `timestamp(p)`, `decimal` and
	/// `decimal(p,s)`, case-insensitively.
	fn from_str(s: &str) -> Result<Self> {
		let invalid = |message: &str| Error::invalid_format(FormatKind::Type, s, message);
		let text = s.trim().to_ascii_lowercase();

		let (name, args) = match text.find('(') {
			Some(open) => {
				let Some(inner) = text[open + 1..].strip_suffix(')') else {
					return Err(invalid("unbalanced parentheses"));
				};
				let args = inner
					.split(',')
					.map(|arg| arg.trim().parse::<u8>().map_err(|_| invalid("type arguments must be small integers")))
					.collect::<Result<Vec<_>>>()?;
				(text[..open].trim(), args)
			}
			None => (text.as_str(), Vec::new()),
		};

		match (name, args.as_slice()) {
			("date", []) => Ok(Self::date()),
			("timestamp", []) => Self::timestamp(DEFAULT_TIMESTAMP_PRECISION),
			("timestamp", [precision]) => Self::timestamp(*precision),
			("decimal", []) => Self::decimal(DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SCALE),
			("decimal", [precision, scale]) => Self::decimal(*precision, *scale),
			("date" | "timestamp" | "decimal", _) => Err(invalid("wrong number of type arguments")),
			_ => Err(invalid(&format!(
				"unknown type, expected date, timestamp(p) or decimal(p,s) with p <= {}",
				MAX_PRECISION
			))),
		}
	}
}

impl TryFrom<String> for TypeDescription {
	type Error = Error;

	fn try_from(value: String) -> Result<Self> {
		value.parse()
	}
}

impl From<TypeDescription> for String {
	fn from(value: TypeDescription) -> Self {
		value.to_string()
	}
}
