use anyhow::{bail, Context, Result};
use converter::{Converter, HEADER_LINES};
use renderer::Cowsay;
use std::{
	env::{self, VarError},
	path::PathBuf,
};
mod converter;
mod renderer;

fn main() -> Result<()> {
	env_logger::init();
	let cows: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
	let header_lines = header_lines(env::var("COWTEXT_HEADER_LINES"))?;
	Converter::new(Cowsay::from_env())
		.with_header_lines(header_lines)
		.convert_all(&cows)?;
	Ok(())
}

/// Line count from `COWTEXT_HEADER_LINES`, or `HEADER_LINES` when it is unset.
fn header_lines(var: Result<String, VarError>) -> Result<usize> {
	match var {
		Ok(v) => v
			.trim()
			.parse()
			.with_context(|| format!("COWTEXT_HEADER_LINES must be a line count, got {:?}", v)),
		Err(VarError::NotPresent) => Ok(HEADER_LINES),
		Err(VarError::NotUnicode(v)) => {
			bail!("COWTEXT_HEADER_LINES must be a line count, got {:?}", v)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::ffi::OsString;

	#[test]
	fn unset_header_lines_is_the_default() {
		assert_eq!(header_lines(Err(VarError::NotPresent)).unwrap(), HEADER_LINES);
	}

	#[test]
	fn header_lines_are_parsed() {
		assert_eq!(header_lines(Ok(" 5 ".to_string())).unwrap(), 5);
		assert!(header_lines(Ok("three".to_string())).is_err());
	}

	#[test]
	fn non_unicode_header_lines_is_an_error() {
		let err = header_lines(Err(VarError::NotUnicode(OsString::from("3")))).unwrap_err();
		assert!(format!("{:#}", err).contains("COWTEXT_HEADER_LINES"));
	}
}
