// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use pixels_type::{Category, Result, TypeDescription};

use crate::primitive::Primitive;

/// Per-type behaviour of a typed column vector: which primitive it stores,
/// how text becomes that primitive, and how a stored value is printed.
pub trait VectorKind: Clone + Debug + Send + Sync + 'static {
	type Native: Primitive;

	/// Alignment in bytes requested for the backing buffer
	const ALIGNMENT: usize;

	const CATEGORY: Category;

	/// Whether [`VectorKind::render`] produces a compact textual form
	const PRINTABLE: bool = true;

	fn description(&self) -> TypeDescription;

	/// Parses a non-boolean literal into the on-disk representation
	fn parse(&self, text: &str) -> Result<Self::Native>;

	fn render(&self, value: Self::Native) -> String;
}
