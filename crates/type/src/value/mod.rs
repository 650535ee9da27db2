// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod date;
pub mod decimal;
pub mod temporal;
mod timestamp;

pub use date::Date;
pub use timestamp::{MICROS_PER_DAY, MICROS_PER_SECOND, Timestamp};
