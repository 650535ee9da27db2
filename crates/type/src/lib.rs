// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Value types and type descriptions shared by the Pixels column vectors and
//! column writers: epoch based dates and timestamps, short decimals, and the
//! error taxonomy of the column layer.

pub mod description;
pub mod error;
pub mod value;

pub use description::{Category, TypeDescription};
pub use error::{Error, FormatKind, Result};
pub use value::{Date, Timestamp};
