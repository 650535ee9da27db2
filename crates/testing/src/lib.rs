// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod bytes;
pub mod logging;
pub mod script;

pub use bytes::{decode_i32_be, decode_i32_le, decode_i64_be, decode_i64_le, hex};
pub use logging::init_tracing;
