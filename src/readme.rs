//! Extraction of paper entries from the README's table.
//!
//! The table is located by its literal header row, then consumed line by line
//! until the first line that is not a table row. Cells are split on every `|`,
//! embedded or not; the table's authoring format keeps pipes out of cell
//! content, and smarter splitting here would silently diverge from what the
//! page has historically rendered.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::entry::PaperEntry;

/// Header row anchoring the paper table. Column names are fixed; their case
/// and the whitespace around each name are not.
static HEADER_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)\|\s*Time\s*\|\s*Venue\s*\|\s*Paper\s*\|\s*Research Question/Idea\s*\|\s*Method\s*\|\s*Remark\s*\|\s*Bib\s*\|").unwrap());

/// The README does not contain the paper table header row.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("paper table header row not found")]
pub struct HeaderNotFound;

/// What one line below the table header turned out to be.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TableLine {
	/// A data row with at least 6 cells.
	Row(PaperEntry),
	/// A `|`-prefixed line with too few cells. Dropped; the table continues.
	Short,
	/// Not a table row. The table has ended and everything after is ignored.
	End,
}

/// Classify one line of table body.
/// One leading and one trailing `|` are stripped, the rest splits on every `|`
/// with each cell trimmed.
pub fn classify_table_line(line: &str) -> TableLine {
	let trimmed = line.trim();
	if !trimmed.starts_with('|') {
		return TableLine::End;
	}
	let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
	let inner = inner.strip_suffix('|').unwrap_or(inner);
	let cells: Vec<&str> = inner.split('|').map(str::trim).collect();
	match PaperEntry::from_cells(&cells) {
		Some(entry) => TableLine::Row(entry),
		None => TableLine::Short,
	}
}

/// Alignment row under the header, e.g. `| :--- | :--- |`.
fn is_separator_row(line: &str) -> bool {
	line.trim().starts_with('|') && line.contains("---")
}

/// Extract every data row of the paper table, in document order.
///
/// The scan hard-stops at the first line that is not a `|` row, so table-shaped
/// text later in the document is never picked up. A header with no rows under
/// it yields an empty vec, which is success rather than [`HeaderNotFound`].
pub fn parse_entries(readme: &str) -> Result<Vec<PaperEntry>, HeaderNotFound> {
	let header = HEADER_RE.find(readme).ok_or(HeaderNotFound)?;
	debug!(offset = header.end(), "matched table header");

	let table = readme[header.end()..].trim();
	let mut lines = table.lines().peekable();
	if let Some(first) = lines.peek()
		&& is_separator_row(first)
	{
		lines.next();
	}

	let mut entries = Vec::new();
	for line in lines {
		match classify_table_line(line) {
			TableLine::Row(entry) => entries.push(entry),
			TableLine::Short => debug!(line, "dropping table row with too few cells"),
			TableLine::End => break,
		}
	}
	Ok(entries)
}
