// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Scanner;
use crate::{FormatKind, Result, value::date::Date};

const EXPECTED: &str = "YYYY-M-D";

/// Parses `YYYY-M-D` (hyphen separated integers, year may be signed) into a
/// proleptic Gregorian date. Surrounding whitespace is ignored.
pub fn parse_date(input: &str) -> Result<Date> {
	let mut scanner = Scanner::new(input, FormatKind::Date, EXPECTED);
	let date = scan_date(&mut scanner)?;
	scanner.finish()?;
	Ok(date)
}

pub(crate) fn scan_date(scanner: &mut Scanner<'_>) -> Result<Date> {
	let year = scanner.signed("year")?;
	scanner.expect(b'-')?;
	let month = scanner.unsigned("month")?;
	scanner.expect(b'-')?;
	let day = scanner.unsigned("day")?;

	let year = i32::try_from(year).map_err(|_| scanner.error(format!("year {} is out of range", year)))?;
	Date::new(year, month, day).ok_or_else(|| scanner.error(format!("{}-{}-{} is not a calendar date", year, month, day)))
}
