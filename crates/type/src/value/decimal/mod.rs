// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Short decimals: a 64-bit unscaled integer plus out-of-band precision and
//! scale. The unscaled value of 3.14 as decimal(3,2) is 314.

mod parse;

pub use parse::{parse_integer, parse_unscaled, render_unscaled};

use crate::{Error, Result};

/// Largest precision (and therefore scale) a 64-bit unscaled value can hold.
pub const MAX_PRECISION: u8 = 18;

pub fn validate_precision_scale(precision: u8, scale: u8) -> Result<()> {
	if precision == 0 || precision > MAX_PRECISION {
		return Err(Error::out_of_range(format!(
			"decimal precision {} is outside 1..={}",
			precision, MAX_PRECISION
		)));
	}
	if scale > precision {
		return Err(Error::out_of_range(format!(
			"decimal scale {} exceeds precision {}",
			scale, precision
		)));
	}
	Ok(())
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_precision_ceiling() {
		assert!(validate_precision_scale(18, 18).is_ok());
		assert!(validate_precision_scale(5, 2).is_ok());
		assert!(matches!(validate_precision_scale(19, 2), Err(Error::OutOfRange { .. })));
		assert!(validate_precision_scale(0, 0).is_err());
	}

	#[test]
	fn test_scale_not_above_precision() {
		assert!(validate_precision_scale(3, 4).is_err());
	}
}
