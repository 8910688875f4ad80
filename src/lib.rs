//! Sync the README's paper table into the site's `const data` array.
//!
//! The README is the single source of truth for the paper list; the page
//! renders the same list from a JSON literal in its script block. Extraction
//! reshapes table rows into [`PaperEntry`] records, rewriting the inline
//! Markdown the page cannot render; injection replaces the page's data
//! statement with the records serialized back out.

pub mod entry;
pub mod markup;
pub mod page;
pub mod readme;

// Re-export the public surface at crate root for convenience
pub use entry::PaperEntry;
pub use markup::{bold_to_strong, links_to_anchors};
pub use page::{AnchorNotFound, inject_entries, render_data_json};
pub use readme::{HeaderNotFound, TableLine, classify_table_line, parse_entries};
