use anyhow::{Context, Result};
use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};
use std::{fs, path::Path};

use crate::bubble::speech_bubble;

/// Cows converted to plain text, kept in memory so one can be picked per message.
#[derive(Clone, Debug, Default)]
pub struct Herd {
	cows: Vec<String>,
}

impl Herd {
	/// Loads every `.txt` file in `dir`, in path order.
	pub fn load(dir: &Path) -> Result<Herd> {
		let mut paths = vec![];
		for entry in fs::read_dir(dir)
			.with_context(|| format!("Couldn't read cows directory {}", dir.display()))?
		{
			let path = match entry {
				Ok(entry) => entry.path(),
				Err(e) => {
					warn!("Skipping an entry in {}: {}", dir.display(), e);
					continue;
				}
			};
			if path.is_file() && path.extension().map_or(false, |ext| ext == "txt") {
				paths.push(path);
			}
		}
		paths.sort();
		let mut cows = Vec::with_capacity(paths.len());
		for path in paths {
			debug!("Loading {}", path.display());
			cows.push(
				fs::read_to_string(&path)
					.with_context(|| format!("Couldn't read cow {}", path.display()))?,
			);
		}
		Ok(Herd { cows })
	}

	pub fn len(&self) -> usize {
		self.cows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cows.is_empty()
	}

	/// The message in a bubble with a random cow under it, or just the bubble
	/// when the herd is empty.
	pub fn say<G: Rng + ?Sized>(&self, lines: &[String], rng: &mut G) -> String {
		let bubble = speech_bubble(lines);
		match self.cows.choose(rng) {
			Some(cow) => [bubble, cow.to_string()].join("\n"),
			None => bubble,
		}
	}
}
