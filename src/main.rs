//! Two-step batch run: extract entries from the README, splice them into the page.
//!
//! No flags and no configuration. Both paths are fixed and resolved against
//! the working directory, which is expected to be the repository root. Every
//! expected failure is printed and the process still exits normally; the
//! printed diagnostics are the whole contract.

use std::{fs, io::ErrorKind, path::Path};

use color_eyre::eyre::Result;
use papersync::{PaperEntry, page, readme};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Source document holding the paper table.
static README_PATH: &str = "README.md";
/// Page whose script block carries the generated data array.
static PAGE_PATH: &str = "index.html";

fn main() -> Result<()> {
	color_eyre::install()?;
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(env_filter).init();

	let entries = parse_readme(Path::new(README_PATH))?;
	if !entries.is_empty() {
		update_page(Path::new(PAGE_PATH), &entries)?;
	}
	Ok(())
}

/// Read the README and extract its paper table.
///
/// The two expected conditions (file missing, header missing) are reported on
/// stderr and yield no entries, which makes the caller skip injection; only
/// unexpected I/O errors propagate.
fn parse_readme(path: &Path) -> Result<Vec<PaperEntry>> {
	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(e) if e.kind() == ErrorKind::NotFound => {
			eprintln!("Error: {} not found.", path.display());
			return Ok(Vec::new());
		}
		Err(e) => return Err(e.into()),
	};
	match readme::parse_entries(&content) {
		Ok(entries) => {
			debug!(count = entries.len(), "extracted paper entries");
			Ok(entries)
		}
		Err(readme::HeaderNotFound) => {
			eprintln!("Error: Could not find the table header in {}", path.display());
			Ok(Vec::new())
		}
	}
}

/// Inject entries into the page and write it back in place.
/// A missing page or a page without the data statement is reported and leaves
/// the file untouched.
fn update_page(path: &Path, entries: &[PaperEntry]) -> Result<()> {
	let html = match fs::read_to_string(path) {
		Ok(html) => html,
		Err(e) if e.kind() == ErrorKind::NotFound => {
			eprintln!("Error: {} not found.", path.display());
			return Ok(());
		}
		Err(e) => return Err(e.into()),
	};
	match page::inject_entries(&html, entries) {
		Ok(updated) => {
			fs::write(path, updated)?;
			println!("Successfully updated {} with {} entries.", path.display(), entries.len());
		}
		Err(page::AnchorNotFound) => {
			eprintln!("Error: Could not find 'const data = [...]' in {}", path.display());
		}
	}
	Ok(())
}
