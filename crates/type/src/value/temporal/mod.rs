// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod parse;

pub use parse::{date::parse_date, timestamp::parse_timestamp};
