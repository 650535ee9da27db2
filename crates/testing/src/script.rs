// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A small line-oriented test script format.
//!
//! A script is a sequence of blocks separated by blank lines. Each block
//! holds one or more commands, a `---` separator and the expected output:
//!
//! ```text
//! # comment
//! writer type=decimal(5,2) padding=true
//! write 12.3 null 1
//! ---
//! position=24
//! ```
//!
//! Arguments are separated by whitespace and are either positional or
//! `key=value`. A command prefixed with `!` must fail; its error is rendered
//! as `Error: <message>` in the output.

use std::{error::Error, fs, path::Path, str::FromStr};

pub type RunResult<T> = std::result::Result<T, Box<dyn Error>>;

/// Executes script commands and renders their output
pub trait Runner {
	fn run(&mut self, command: &Command) -> RunResult<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
	pub key: Option<String>,
	pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	pub name: String,
	pub args: Vec<Argument>,
	pub fail: bool,
	pub line_number: usize,
}

impl Command {
	pub fn consume_args(&self) -> ArgumentConsumer<'_> {
		ArgumentConsumer {
			args: self.args.iter().collect(),
		}
	}
}

/// Takes arguments off a command one by one, rejecting leftovers
pub struct ArgumentConsumer<'a> {
	args: Vec<&'a Argument>,
}

impl<'a> ArgumentConsumer<'a> {
	pub fn next_pos(&mut self) -> Option<&'a Argument> {
		let index = self.args.iter().position(|arg| arg.key.is_none())?;
		Some(self.args.remove(index))
	}

	pub fn rest_pos(&mut self) -> Vec<&'a Argument> {
		let (positional, keyed): (Vec<&'a Argument>, Vec<&'a Argument>) =
			self.args.drain(..).partition(|arg| arg.key.is_none());
		self.args = keyed;
		positional
	}

	pub fn lookup(&mut self, key: &str) -> Option<&'a Argument> {
		let index = self.args.iter().position(|arg| arg.key.as_deref() == Some(key))?;
		Some(self.args.remove(index))
	}

	pub fn lookup_parse<T>(&mut self, key: &str) -> RunResult<Option<T>>
	where
		T: FromStr,
		T::Err: Error + 'static,
	{
		match self.lookup(key) {
			Some(arg) => Ok(Some(arg.value.parse().map_err(|err| Box::new(err) as Box<dyn Error>)?)),
			None => Ok(None),
		}
	}

	pub fn reject_rest(&self) -> RunResult<()> {
		match self.args.first() {
			Some(arg) => Err(format!("unexpected argument '{}'", arg.value).into()),
			None => Ok(()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
	pub commands: Vec<Command>,
	pub expected: String,
	pub line_number: usize,
}

fn parse_command(line: &str, line_number: usize) -> RunResult<Command> {
	let (fail, line) = match line.strip_prefix('!') {
		Some(rest) => (true, rest.trim_start()),
		None => (false, line),
	};
	let mut words = line.split_whitespace();
	let name = words.next().ok_or_else(|| format!("line {}: empty command", line_number))?.to_string();
	let args = words
		.map(|word| match word.split_once('=') {
			Some((key, value)) => Argument {
				key: Some(key.to_string()),
				value: value.to_string(),
			},
			None => Argument {
				key: None,
				value: word.to_string(),
			},
		})
		.collect();
	Ok(Command {
		name,
		args,
		fail,
		line_number,
	})
}

pub fn parse(input: &str) -> RunResult<Vec<Block>> {
	let mut blocks = Vec::new();
	let mut lines = input.lines().enumerate().map(|(index, line)| (index + 1, line.trim_end())).peekable();

	while let Some(&(line_number, line)) = lines.peek() {
		if line.is_empty() || line.starts_with('#') {
			lines.next();
			continue;
		}

		let mut commands = Vec::new();
		loop {
			match lines.next() {
				Some((_, "---")) => break,
				Some((number, line)) if !line.is_empty() => commands.push(parse_command(line, number)?),
				_ => return Err(format!("line {}: block has no '---' separator", line_number).into()),
			}
		}

		let mut expected = String::new();
		while let Some((_, line)) = lines.next_if(|(_, line)| !line.is_empty()) {
			expected.push_str(line);
			expected.push('\n');
		}

		blocks.push(Block {
			commands,
			expected,
			line_number,
		});
	}

	Ok(blocks)
}

/// Runs every block of `input` and returns the rendered output per block
pub fn generate<R: Runner>(runner: &mut R, input: &str) -> RunResult<Vec<(Block, String)>> {
	let mut results = Vec::new();
	for block in parse(input)? {
		let mut output = String::new();
		for command in &block.commands {
			match (runner.run(command), command.fail) {
				(Ok(out), false) => output.push_str(&out),
				(Err(err), true) => {
					output.push_str(&format!("Error: {}\n", err));
				}
				(Ok(_), true) => {
					return Err(format!("line {}: expected '{}' to fail", command.line_number, command.name)
						.into());
				}
				(Err(err), false) => {
					return Err(format!("line {}: '{}' failed: {}", command.line_number, command.name, err)
						.into());
				}
			}
		}
		results.push((block, output));
	}
	Ok(results)
}

/// Runs the script at `path`, panicking on the first block whose output
/// differs from the expectation.
pub fn run_path<R: Runner>(runner: &mut R, path: &Path) {
	let input = fs::read_to_string(path).unwrap_or_else(|err| panic!("failed to read {}: {}", path.display(), err));
	let results = generate(runner, &input).unwrap_or_else(|err| panic!("{}: {}", path.display(), err));
	for (block, output) in results {
		assert_eq!(
			output,
			block.expected,
			"{}:{}: output differs from the expectation",
			path.display(),
			block.line_number
		);
	}
}
