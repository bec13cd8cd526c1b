use anyhow::{bail, Context, Result};
use log::{debug, warn};
use std::{env, ffi::OsStr, path::Path};
use subprocess::{Popen, PopenConfig, Redirection};

/// Something that can draw a cow file with a message and hand back the text.
pub trait Render {
	fn render(&self, cow: &Path, message: &str) -> Result<String>;
}

/// The external `cowsay` program, run directly from an argument vector.
#[derive(Debug, Clone)]
pub struct Cowsay {
	pub program: String,
	pub strict: bool,
}

impl Default for Cowsay {
	fn default() -> Cowsay {
		Cowsay {
			program: "cowsay".to_string(),
			strict: false,
		}
	}
}

impl Cowsay {
	/// Reads `COWTEXT_RENDERER` and `COWTEXT_STRICT`.
	pub fn from_env() -> Cowsay {
		Cowsay {
			program: env::var("COWTEXT_RENDERER").unwrap_or_else(|_| "cowsay".to_string()),
			strict: env::var("COWTEXT_STRICT")
				.map(|v| is_set(&v))
				.unwrap_or(false),
		}
	}
}

/// Treats empty, `0`, `false`, `no` and `off` (any case) as unset.
pub fn is_set(value: &str) -> bool {
	let value = value.trim().to_ascii_lowercase();
	!matches!(value.as_str(), "" | "0" | "false" | "no" | "off")
}

impl Render for Cowsay {
	fn render(&self, cow: &Path, message: &str) -> Result<String> {
		let cmd = [
			OsStr::new(&self.program),
			OsStr::new("-f"),
			cow.as_os_str(),
			OsStr::new(message),
		];
		debug!("Running {:?}", cmd);
		let mut renderer = match Popen::create(
			&cmd,
			PopenConfig {
				stdout: Redirection::Pipe,
				..PopenConfig::default()
			},
		) {
			Ok(p) => p,
			Err(e) if !self.strict => {
				warn!("Couldn't start {} for {}: {}", self.program, cow.display(), e);
				return Ok(String::new());
			}
			Err(e) => {
				return Err(e).with_context(|| {
					format!("Couldn't start {} for {}", self.program, cow.display())
				})
			}
		};
		let stdout = match renderer.communicate_bytes(None) {
			Ok((stdout, _)) => stdout,
			Err(e) if !self.strict => {
				warn!("Couldn't read output of {} for {}: {}", self.program, cow.display(), e);
				None
			}
			Err(e) => {
				return Err(e).with_context(|| {
					format!("Couldn't read output of {} for {}", self.program, cow.display())
				})
			}
		};
		let status = renderer
			.wait()
			.with_context(|| format!("Error waiting for {}", self.program))?;
		if !status.success() {
			if self.strict {
				bail!(
					"{} exited with {:?} for {}",
					self.program,
					status,
					cow.display()
				);
			}
			warn!(
				"{} exited with {:?} for {}, keeping its output anyway",
				self.program,
				status,
				cow.display()
			);
		}
		Ok(String::from_utf8_lossy(&stdout.unwrap_or_default()).into_owned())
	}
}
