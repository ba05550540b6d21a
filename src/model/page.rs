//! Resolved page type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A page with all fallback rules applied.
///
/// Derived from a [`PageSpec`]: the section title is never empty (it falls
/// back to the document title), and the page label is either a concrete
/// value or `None`, meaning the label block is suppressed entirely.
///
/// [`PageSpec`]: crate::model::PageSpec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPage {
    /// Heading rendered at the top of the page; never empty
    pub section_title: String,

    /// Positional marker; `None` suppresses the label paragraph
    pub page_label: Option<String>,

    /// Table header cells, passed through unchanged
    pub headers: Vec<String>,

    /// Table rows, passed through unchanged
    pub rows: Vec<Vec<Value>>,
}

impl ResolvedPage {
    /// Whether the page carries a table.
    pub fn has_table(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Get the number of data rows on the page.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
