use anyhow::{anyhow, Context, Result};
use herd::Herd;
use log::{debug, warn};
use std::{
	env,
	ffi::OsString,
	io::{self, BufRead},
	path::PathBuf,
};

mod bubble;
mod herd;

fn main() -> Result<()> {
	env_logger::init();
	let (dir, words) = parse_args(env::args_os().skip(1))?;
	let lines = if words.is_empty() {
		io::stdin()
			.lock()
			.lines()
			.collect::<io::Result<Vec<String>>>()
			.context("Couldn't read message from stdin")?
	} else {
		vec![words.join(" ")]
	};
	let herd = Herd::load(&dir)?;
	if herd.is_empty() {
		warn!("No converted cows in {}", dir.display());
	} else {
		debug!("{} cows in the herd", herd.len());
	}
	println!("{}", herd.say(&lines, &mut rand::thread_rng()));
	Ok(())
}

/// Splits the arguments into the cow directory and the message words.
fn parse_args<I: Iterator<Item = OsString>>(mut args: I) -> Result<(PathBuf, Vec<String>)> {
	let dir = args
		.next()
		.map(PathBuf::from)
		.ok_or_else(|| anyhow!("Usage: cowtext-say <cow dir> [message...]"))?;
	let words = args
		.map(|word| {
			word.into_string()
				.map_err(|word| anyhow!("Message words must be valid UTF-8, got {:?}", word))
		})
		.collect::<Result<Vec<String>>>()?;
	Ok((dir, words))
}
