// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{Scanner, date::scan_date};
use crate::{FormatKind, Result, value::timestamp::Timestamp};

const EXPECTED: &str = "YYYY-M-D H:M:S";

/// Parses `YYYY-M-D H:M:S` with a single space between date and time, and an
/// optional fractional second of up to six digits (`H:M:S.ffffff`).
pub fn parse_timestamp(input: &str) -> Result<Timestamp> {
	let mut scanner = Scanner::new(input, FormatKind::Timestamp, EXPECTED);

	let date = scan_date(&mut scanner)?;
	scanner.expect(b' ')?;
	let hour = scanner.unsigned("hour")?;
	scanner.expect(b':')?;
	let minute = scanner.unsigned("minute")?;
	scanner.expect(b':')?;
	let second = scanner.unsigned("second")?;

	let mut micros = 0u32;
	if scanner.consume(b'.') {
		let (fraction, digits) = scanner.digits("fractional second")?;
		if digits > 6 {
			return Err(scanner.error("fractional seconds finer than microseconds"));
		}
		micros = (fraction * 10u64.pow((6 - digits) as u32)) as u32;
	}
	scanner.finish()?;

	if hour > 23 || minute > 59 || second > 59 {
		return Err(scanner.error(format!("{}:{}:{} is not a time of day", hour, minute, second)));
	}

	Timestamp::from_date_time(date, hour, minute, second, micros)
}
