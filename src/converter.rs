use anyhow::{bail, Context, Result};
use log::info;
use std::{
	fs,
	path::{Path, PathBuf},
};

use crate::renderer::Render;

/// Lines cowsay prints above the cow for a one-line message: the top of the
/// bubble, the message itself and the bottom of the bubble.
pub const HEADER_LINES: usize = 3;

/// Message handed to the renderer. A single space keeps the bubble at its
/// smallest fixed size.
pub const BLANK_MESSAGE: &str = " ";

pub const SUFFIX: &str = ".txt";

/// Turns cow files into plain text that can be printed under a speech bubble.
pub struct Converter<R: Render> {
	renderer: R,
	header_lines: usize,
}

impl<R: Render> Converter<R> {
	pub fn new(renderer: R) -> Converter<R> {
		Converter {
			renderer,
			header_lines: HEADER_LINES,
		}
	}

	pub fn with_header_lines(mut self, header_lines: usize) -> Converter<R> {
		self.header_lines = header_lines;
		self
	}

	/// Converts a single cow file and returns where the text was written.
	pub fn convert(&self, cow: &Path) -> Result<PathBuf> {
		let rendered = self.renderer.render(cow, BLANK_MESSAGE)?;
		let body = strip_header(&rendered, self.header_lines);
		let out = output_path(cow);
		fs::write(&out, body).with_context(|| format!("Couldn't write {}", out.display()))?;
		info!("{} -> {}", cow.display(), out.display());
		Ok(out)
	}

	/// Converts every cow in order, stopping at the first failure. Files
	/// already written stay where they are.
	pub fn convert_all<P: AsRef<Path>>(&self, cows: &[P]) -> Result<Vec<PathBuf>> {
		if cows.is_empty() {
			bail!("Provide cow file names to convert to text");
		}
		cows.iter().map(|cow| self.convert(cow.as_ref())).collect()
	}
}

/// Drops the first `lines` lines of `text`. A trailing newline ends the last
/// line rather than starting an empty one.
pub fn strip_header(text: &str, lines: usize) -> String {
	text.split_terminator('\n')
		.skip(lines)
		.collect::<Vec<&str>>()
		.join("\n")
}

/// `moose.cow` becomes `moose.cow.txt`.
pub fn output_path(cow: &Path) -> PathBuf {
	let mut out = cow.as_os_str().to_owned();
	out.push(SUFFIX);
	PathBuf::from(out)
}
