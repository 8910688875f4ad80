//! Injection of rendered entries into the page's `const data` statement.
//!
//! The statement is matched textually, non-greedily up to the first `];`, and
//! replaced wholesale. The declaration prefix is captured so whatever spacing
//! the page uses around the `=` survives the rewrite.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::entry::PaperEntry;

static DATA_STMT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)(const\s+data\s*=\s*)\[.*?\];").unwrap());

/// The page has no `const data = [...]` statement to replace.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("`const data = [...]` statement not found")]
pub struct AnchorNotFound;

/// Render entries as the page's data array: a JSON array of objects indented
/// with 4 spaces, keys in [`PaperEntry`] declaration order.
pub fn render_data_json(entries: &[PaperEntry]) -> String {
	let mut buf = Vec::new();
	let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
	entries.serialize(&mut ser).expect("string-only fields serialize infallibly");
	String::from_utf8(buf).expect("serde_json emits utf-8")
}

/// Replace the first `const data = [...]` statement with `entries` rendered as
/// JSON. The replacement goes through a closure so the JSON lands verbatim,
/// with no `$` group expansion applied to cell content.
///
/// Fails without producing a document when no statement matches.
pub fn inject_entries(html: &str, entries: &[PaperEntry]) -> Result<String, AnchorNotFound> {
	if !DATA_STMT_RE.is_match(html) {
		return Err(AnchorNotFound);
	}
	let json = render_data_json(entries);
	let updated = DATA_STMT_RE.replace(html, |caps: &Captures| format!("{}{json};", &caps[1]));
	debug!(count = entries.len(), "replaced data statement");
	Ok(updated.into_owned())
}
