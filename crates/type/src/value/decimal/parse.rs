// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::num::IntErrorKind;

use crate::{Error, FormatKind, Result};

/// Parses a plain signed 64-bit integer literal.
pub fn parse_integer(input: &str) -> Result<i64> {
	parse_digits(input.trim(), input, FormatKind::Integer)
}

fn parse_digits(digits: &str, input: &str, kind: FormatKind) -> Result<i64> {
	digits.parse::<i64>().map_err(|err| match err.kind() {
		IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
			Error::out_of_range(format!("'{}' does not fit in a 64-bit integer", input.trim()))
		}
		_ => Error::invalid_format(kind, input.trim(), "expected [-]digits[.digits]"),
	})
}

/// Converts a decimal literal into its unscaled 64-bit value at `scale`.
///
/// A literal without a decimal point is taken as already unscaled and is
/// returned as-is. Otherwise the fractional digits are right-padded with
/// zeros up to `scale` and glued to the integer digits; fractional parts
/// longer than `scale` are kept whole, not rounded or truncated.
pub fn parse_unscaled(input: &str, scale: u8) -> Result<i64> {
	let value = input.trim();

	let Some(dot) = value.find('.') else {
		return parse_digits(value, input, FormatKind::Decimal);
	};

	let int_part = &value[..dot];
	let frac_part = &value[dot + 1..];

	let int_digits = int_part.strip_prefix(['-', '+']).unwrap_or(int_part);
	if !int_digits.bytes().all(|b| b.is_ascii_digit())
		|| !frac_part.bytes().all(|b| b.is_ascii_digit())
		|| int_digits.len() + frac_part.len() == 0
	{
		return Err(Error::invalid_format(FormatKind::Decimal, value, "expected [-]digits[.digits]"));
	}

	let scale = scale as usize;
	let mut full = String::with_capacity(int_part.len() + frac_part.len().max(scale));
	full.push_str(int_part);
	full.push_str(frac_part);
	for _ in frac_part.len()..scale {
		full.push('0');
	}

	parse_digits(&full, input, FormatKind::Decimal)
}

/// Renders an unscaled value with its decimal point restored.
pub fn render_unscaled(value: i64, scale: u8) -> String {
	if scale == 0 {
		return value.to_string();
	}

	let scale = scale as usize;
	let digits = (value as i128).unsigned_abs().to_string();
	let digits = if digits.len() <= scale {
		format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
	} else {
		digits
	};
	let (int_part, frac_part) = digits.split_at(digits.len() - scale);

	if value < 0 {
		format!("-{}.{}", int_part, frac_part)
	} else {
		format!("{}.{}", int_part, frac_part)
	}
}
