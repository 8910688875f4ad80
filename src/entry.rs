//! The record one README table row produces.

use serde::{Deserialize, Serialize};

use crate::markup;

/// One paper from the README table, with inline Markdown already rewritten to
/// the HTML fragments the page renders directly.
///
/// Field declaration order is the JSON key order and matches the table's
/// column order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PaperEntry {
	pub time: String,
	pub venue: String,
	pub paper: String,
	pub question: String,
	pub method: String,
	pub remark: String,
	pub bib: String,
}

impl PaperEntry {
	/// Build an entry from trimmed column cells, applying the per-column
	/// rewrites: links in `paper`, bold in `question` and `method`, all other
	/// cells verbatim.
	///
	/// Returns None when fewer than 6 cells are given. A missing seventh cell
	/// leaves `bib` empty; cells past the seventh are ignored.
	pub fn from_cells(cells: &[&str]) -> Option<Self> {
		if cells.len() < 6 {
			return None;
		}
		Some(Self {
			time: cells[0].to_string(),
			venue: cells[1].to_string(),
			paper: markup::links_to_anchors(cells[2]),
			question: markup::bold_to_strong(cells[3]),
			method: markup::bold_to_strong(cells[4]),
			remark: cells[5].to_string(),
			bib: cells.get(6).copied().unwrap_or("").to_string(),
		})
	}
}
