//! # mkdocx
//!
//! Render structured extraction JSON into paginated, typographically
//! formatted Word (DOCX) documents.
//!
//! Upstream extraction pipelines emit loosely structured JSON: a titled
//! document with labeled pages and tabular rows, sometimes wrapped in a
//! batch array or double-encoded as a string. This library normalizes any
//! of those shapes into one canonical model and renders it with fixed
//! typographic rules and correct Chinese-script font handling.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//!
//! fn main() -> mkdocx::Result<()> {
//!     let export = mkdocx::export_value(json!({
//!         "document_title": "單字整理",
//!         "pages": [{
//!             "section_title": "Unit 1",
//!             "headers": ["單字", "例句", "中譯"],
//!             "data": [["apple", "I ate an apple.", "蘋果"]]
//!         }]
//!     }))?;
//!
//!     assert_eq!(export.filename, "單字整理.docx");
//!     // export.bytes is the packed document
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Data flows one way, with no state held across conversions:
//!
//! 1. [`normalize`] collapses wrapping layers into a canonical mapping
//! 2. [`model`] applies every fallback rule (titles, labels, defaults)
//! 3. [`layout`] maps the document to an ordered render-block sequence
//! 4. [`render`] packs the blocks into the OOXML ZIP container
//!
//! The [`Exporter`] service orchestrates all four and is safe to share
//! across threads.

pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod normalize;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{Export, ExportOptions, Exporter, Limits, DEFAULT_FONT_FAMILY};
pub use layout::{
    build_blocks, Alignment, Block, CellBlock, ColumnPolicy, LayoutBuilder, LayoutOptions,
    ParagraphBlock, PolicyTable, TableBlock,
};
pub use model::{Document, PageSpec, Payload, ResolvedPage, DEFAULT_TITLE};
pub use render::{DocxRenderer, FILE_EXTENSION, MIME_TYPE};

use serde_json::Value;

/// Export a raw JSON value with default options.
///
/// The value may be the payload object itself, wrapped in array layers,
/// or a JSON-encoded string of either.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let export = mkdocx::export_value(json!({"document_title": "T", "pages": []})).unwrap();
/// assert_eq!(export.filename, "T.docx");
/// ```
pub fn export_value(value: Value) -> Result<Export> {
    Exporter::new().export_value(value)
}

/// Export from JSON text with default options.
///
/// # Example
///
/// ```
/// let export = mkdocx::export_str(r#"{"document_title":"T"}"#).unwrap();
/// assert_eq!(export.filename, "T.docx");
/// ```
pub fn export_str(text: &str) -> Result<Export> {
    Exporter::new().export_str(text)
}

/// Export from raw bytes with default options.
///
/// Bytes are decoded as UTF-8 text, then parsed as JSON. This is the
/// file-upload ingress path.
pub fn export_bytes(data: &[u8]) -> Result<Export> {
    Exporter::new().export_bytes(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_value_convenience() {
        let export = export_value(json!({"document_title": "T", "pages": []})).unwrap();
        assert_eq!(export.filename, "T.docx");
        assert!(!export.bytes.is_empty());
    }

    #[test]
    fn test_export_bytes_convenience() {
        let export = export_bytes(b"{\"document_title\":\"T\"}").unwrap();
        assert_eq!(export.filename, "T.docx");
    }

    #[test]
    fn test_export_value_empty_batch_fails() {
        let result = export_value(json!([]));
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_exporter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Exporter>();
    }
}
