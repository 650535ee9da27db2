// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{error::Error, fmt::Write, path::Path};

use pixels_column::AnyColumnVector;
use pixels_testing::{
	hex, init_tracing,
	script::{self, Command, RunResult},
};
use pixels_type::{Category, TypeDescription};
use pixels_writer::{ByteOrder, DateColumnWriter, DecimalColumnWriter, TimestampColumnWriter, WriterOption};
use test_each_file::test_each_path;

test_each_path! { in "crates/writer/tests/scripts" as writer => run_test }

fn run_test(path: &Path) {
	init_tracing();
	script::run_path(&mut Runner::default(), path)
}

enum Writer {
	Date(DateColumnWriter),
	Timestamp(TimestampColumnWriter),
	Decimal(DecimalColumnWriter),
}

#[derive(Default)]
struct Runner {
	description: Option<TypeDescription>,
	writer: Option<Writer>,
}

impl Runner {
	fn writer(&mut self) -> RunResult<&mut Writer> {
		self.writer.as_mut().ok_or_else(|| "no writer, run 'writer' first".into())
	}
}

fn parse_order(value: &str) -> RunResult<ByteOrder> {
	match value {
		"little" => Ok(ByteOrder::LittleEndian),
		"big" => Ok(ByteOrder::BigEndian),
		other => Err(format!("unknown byte order '{}'", other).into()),
	}
}

impl script::Runner for Runner {
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		let mut output = String::new();
		let mut args = command.consume_args();
		match command.name.as_str() {
			// writer type=<description> [order=little|big] [padding=bool] [stride=n]
			"writer" => {
				let description: TypeDescription = args.lookup("type").ok_or("type not given")?.value.parse()?;
				let mut option = WriterOption::default();
				if let Some(order) = args.lookup("order") {
					option = option.with_byte_order(parse_order(&order.value)?);
				}
				if let Some(padding) = args.lookup_parse::<bool>("padding")? {
					option = option.with_nulls_padding(padding);
				}
				if let Some(stride) = args.lookup_parse::<usize>("stride")? {
					option = option.with_pixel_stride(stride);
				}
				args.reject_rest()?;

				let writer = match description.category() {
					Category::Date => Writer::Date(DateColumnWriter::in_memory(description, &option)?),
					Category::Timestamp => {
						Writer::Timestamp(TimestampColumnWriter::in_memory(description, &option)?)
					}
					Category::Decimal => Writer::Decimal(DecimalColumnWriter::in_memory(description, &option)?),
				};
				self.description = Some(description);
				self.writer = Some(writer);
			}

			// write <value|null>..., underscores stand in for spaces
			"write" => {
				let description = self.description.ok_or("no writer, run 'writer' first")?;
				let rows = args.rest_pos();
				args.reject_rest()?;

				let mut vector = AnyColumnVector::create(&description, rows.len(), true)?;
				for row in &rows {
					match row.value.as_str() {
						"null" => vector.add_null()?,
						text => vector.add_str(&text.replace('_', " "))?,
					}
				}

				let position = match (self.writer()?, &vector) {
					(Writer::Date(writer), AnyColumnVector::Date(vector)) => writer.write(vector, rows.len())?,
					(Writer::Timestamp(writer), AnyColumnVector::Timestamp(vector)) => {
						writer.write(vector, rows.len())?
					}
					(Writer::Decimal(writer), AnyColumnVector::Decimal(vector)) => {
						writer.write(vector, rows.len())?
					}
					_ => return Err("vector does not match the writer".into()),
				};
				writeln!(output, "position={}", position)?;
			}

			"flush" => {
				args.reject_rest()?;
				let size = match self.writer()? {
					Writer::Date(writer) => writer.flush()?,
					Writer::Timestamp(writer) => writer.flush()?,
					Writer::Decimal(writer) => writer.flush()?,
				};
				writeln!(output, "size={}", size)?;
			}

			"close" => {
				args.reject_rest()?;
				match self.writer()? {
					Writer::Date(writer) => writer.close()?,
					Writer::Timestamp(writer) => writer.close()?,
					Writer::Decimal(writer) => writer.close()?,
				}
			}

			// dump: output bytes grouped per value, pixel ends and the null flag
			"dump" => {
				args.reject_rest()?;
				let width = self.description.ok_or("no writer")?.category().width();
				let (bytes, pixels, has_null) = match self.writer()? {
					Writer::Date(writer) => (
						writer.output().as_bytes().to_vec(),
						writer.column_chunk_index().positions().collect::<Vec<_>>(),
						writer.has_null(),
					),
					Writer::Timestamp(writer) => (
						writer.output().as_bytes().to_vec(),
						writer.column_chunk_index().positions().collect::<Vec<_>>(),
						writer.has_null(),
					),
					Writer::Decimal(writer) => (
						writer.output().as_bytes().to_vec(),
						writer.column_chunk_index().positions().collect::<Vec<_>>(),
						writer.has_null(),
					),
				};
				writeln!(output, "bytes: {}", hex(&bytes, width))?;
				writeln!(output, "pixels: {:?}", pixels)?;
				writeln!(output, "has_null: {}", has_null)?;
			}

			name => return Err(format!("unknown command '{}'", name).into()),
		}
		Ok(output)
	}
}
