// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::{Error, Result};

/// A proleptic Gregorian calendar date, stored as its signed day count from
/// 1970-01-01. The day count is also the 4-byte on-disk form of a date
/// column value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	days_since_epoch: i32,
}

/// Days from 0000-03-01 to 1970-01-01
const EPOCH_SHIFT: i64 = 719_468;
const DAYS_PER_ERA: i64 = 146_097;

fn is_leap_year(year: i64) -> bool {
	year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn last_day_of_month(year: i64, month: u32) -> Option<u32> {
	let last = match month {
		2 if is_leap_year(year) => 29,
		2 => 28,
		4 | 6 | 9 | 11 => 30,
		1..=12 => 31,
		_ => return None,
	};
	Some(last)
}

/// Day count of a civil date relative to the epoch. Years are counted from
/// March so the leap day falls at the end of each computational year.
fn days_from_civil(year: i64, month: u32, day: u32) -> Option<i64> {
	if day == 0 || day > last_day_of_month(year, month)? {
		return None;
	}

	let march_year = if month <= 2 {
		year - 1
	} else {
		year
	};
	let march_month = (month as i64 + 9) % 12;

	let era = march_year.div_euclid(400);
	let year_of_era = march_year.rem_euclid(400);
	let day_of_year = (153 * march_month + 2) / 5 + day as i64 - 1;
	let day_of_era = 365 * year_of_era + year_of_era / 4 - year_of_era / 100 + day_of_year;

	Some(era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT)
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
	let shifted = days + EPOCH_SHIFT;
	let era = shifted.div_euclid(DAYS_PER_ERA);
	let day_of_era = shifted.rem_euclid(DAYS_PER_ERA);

	let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
	let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
	let march_month = (5 * day_of_year + 2) / 153;

	let day = (day_of_year - (153 * march_month + 2) / 5 + 1) as u32;
	let month = ((march_month + 2) % 12 + 1) as u32;
	let year = year_of_era + era * 400 + i64::from(month <= 2);

	(year, month, day)
}

impl Date {
	/// `None` unless the triple names a real calendar day within the
	/// 32-bit day range.
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		let days = days_from_civil(year as i64, month, day)?;
		Some(Self {
			days_since_epoch: i32::try_from(days).ok()?,
		})
	}

	pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
		Self::new(year, month, day)
			.ok_or_else(|| Error::out_of_range(format!("{}-{}-{} is not a calendar date", year, month, day)))
	}

	pub fn from_days_since_epoch(days: i32) -> Self {
		Self {
			days_since_epoch: days,
		}
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn ymd(&self) -> (i32, u32, u32) {
		let (year, month, day) = civil_from_days(self.days_since_epoch as i64);
		(year as i32, month, day)
	}

	pub fn year(&self) -> i32 {
		self.ymd().0
	}

	pub fn month(&self) -> u32 {
		self.ymd().1
	}

	pub fn day(&self) -> u32 {
		self.ymd().2
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = self.ymd();
		let sign = if year < 0 {
			"-"
		} else {
			""
		};
		write!(f, "{}{:04}-{:02}-{:02}", sign, year.unsigned_abs(), month, day)
	}
}
