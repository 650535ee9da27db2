// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Decoders for the fixed-width values column writers emit. Trailing bytes
//! that do not fill a whole value are ignored.

use std::fmt::Write;

pub fn decode_i32_le(bytes: &[u8]) -> Vec<i32> {
	bytes.chunks_exact(4).map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])).collect()
}

pub fn decode_i32_be(bytes: &[u8]) -> Vec<i32> {
	bytes.chunks_exact(4).map(|chunk| i32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])).collect()
}

pub fn decode_i64_le(bytes: &[u8]) -> Vec<i64> {
	bytes.chunks_exact(8).map(|chunk| i64::from_le_bytes(to_array(chunk))).collect()
}

pub fn decode_i64_be(bytes: &[u8]) -> Vec<i64> {
	bytes.chunks_exact(8).map(|chunk| i64::from_be_bytes(to_array(chunk))).collect()
}

fn to_array(chunk: &[u8]) -> [u8; 8] {
	let mut array = [0; 8];
	array.copy_from_slice(chunk);
	array
}

/// Lower-case hex, one space between groups of `width` bytes
pub fn hex(bytes: &[u8], width: usize) -> String {
	let mut out = String::with_capacity(bytes.len() * 3);
	for (index, chunk) in bytes.chunks(width.max(1)).enumerate() {
		if index > 0 {
			out.push(' ');
		}
		for byte in chunk {
			let _ = write!(out, "{:02x}", byte);
		}
	}
	out
}
