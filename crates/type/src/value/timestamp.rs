// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::{Error, Result, value::date::Date};

pub const MICROS_PER_SECOND: i64 = 1_000_000;
pub const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// A point in time without timezone, stored as microseconds since
/// 1970-01-01T00:00:00 UTC. This is the 8-byte on-disk representation of a
/// timestamp column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
	micros_since_epoch: i64,
}

impl Timestamp {
	pub fn from_micros_since_epoch(micros: i64) -> Self {
		Self {
			micros_since_epoch: micros,
		}
	}

	pub fn to_micros_since_epoch(&self) -> i64 {
		self.micros_since_epoch
	}

	pub fn from_date_time(date: Date, hour: u32, minute: u32, second: u32, micros: u32) -> Result<Self> {
		if hour > 23 || minute > 59 || second > 59 || micros as i64 >= MICROS_PER_SECOND {
			return Err(Error::out_of_range(format!(
				"invalid time of day: {:02}:{:02}:{:02}.{:06}",
				hour, minute, second, micros
			)));
		}

		let seconds_of_day = hour as i64 * 3600 + minute as i64 * 60 + second as i64;
		let micros_of_day = seconds_of_day * MICROS_PER_SECOND + micros as i64;

		(date.to_days_since_epoch() as i64)
			.checked_mul(MICROS_PER_DAY)
			.and_then(|day_micros| day_micros.checked_add(micros_of_day))
			.map(Self::from_micros_since_epoch)
			.ok_or_else(|| Error::out_of_range(format!("timestamp on {} overflows 64-bit microseconds", date)))
	}

	pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
		Self::from_date_time(Date::from_ymd(year, month, day)?, hour, minute, second, 0)
	}

	pub fn date(&self) -> Date {
		Date::from_days_since_epoch(self.micros_since_epoch.div_euclid(MICROS_PER_DAY) as i32)
	}

	/// Returns (hour, minute, second, microsecond) within the day
	pub fn time_of_day(&self) -> (u32, u32, u32, u32) {
		let micros_of_day = self.micros_since_epoch.rem_euclid(MICROS_PER_DAY);
		let seconds = micros_of_day / MICROS_PER_SECOND;
		let micros = micros_of_day % MICROS_PER_SECOND;
		((seconds / 3600) as u32, ((seconds % 3600) / 60) as u32, (seconds % 60) as u32, micros as u32)
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (hour, minute, second, micros) = self.time_of_day();
		write!(f, "{} {:02}:{:02}:{:02}", self.date(), hour, minute, second)?;
		if micros != 0 {
			write!(f, ".{:06}", micros)?;
		}
		Ok(())
	}
}
