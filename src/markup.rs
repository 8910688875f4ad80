//! Inline Markdown spans rewritten to the HTML fragments the page renders.
//!
//! Only the two shapes the table actually uses are handled: `[label](url)`
//! links and `**text**` bold spans. These are literal non-greedy patterns
//! over cell text, not a Markdown parser, and must stay that way to keep the
//! generated page byte-compatible with existing documents.

use std::sync::LazyLock;

use regex::Regex;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Rewrite every `[label](url)` span to `<a href="url">label</a>`.
pub fn links_to_anchors(cell: &str) -> String {
	LINK_RE.replace_all(cell, r#"<a href="${2}">${1}</a>"#).into_owned()
}

/// Rewrite every `**text**` span to `<strong>text</strong>`.
pub fn bold_to_strong(cell: &str) -> String {
	BOLD_RE.replace_all(cell, "<strong>${1}</strong>").into_owned()
}
