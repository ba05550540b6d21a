//! Document-level types and fallback resolution.

use serde::{Deserialize, Serialize};

use super::{Payload, ResolvedPage};

/// Placeholder title used when the producer sends none.
///
/// Matches the label the upstream extraction pipeline gives untitled
/// results ("document extraction result").
pub const DEFAULT_TITLE: &str = "文件提取結果";

/// A fully resolved document: title plus ordered pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Resolved document title; never empty
    pub title: String,

    /// Pages in render order
    pub pages: Vec<ResolvedPage>,
}

impl Document {
    /// Resolve a canonical payload into a document.
    ///
    /// Fallback rules, applied per page at index `i` (0-based):
    ///
    /// - the document title defaults to [`DEFAULT_TITLE`] when absent or
    ///   empty,
    /// - `section_title` keeps an explicit value unless it is empty or the
    ///   literal string `"null"` (extraction artifacts), in which case it
    ///   falls back to the document title,
    /// - `page_label` keeps an explicit value, synthesizes `"p.{i+1}"` when
    ///   absent, and maps an explicitly empty value to `None` so the label
    ///   block is suppressed rather than defaulted.
    pub fn from_payload(payload: Payload) -> Self {
        let title = match payload.document_title {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_TITLE.to_string(),
        };

        let pages = payload
            .pages
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                let section_title = match spec.section_title {
                    Some(t) if !t.is_empty() && t != "null" => t,
                    _ => title.clone(),
                };
                let page_label = match spec.page_label {
                    Some(label) if label.is_empty() => None,
                    Some(label) => Some(label),
                    None => Some(format!("p.{}", i + 1)),
                };
                ResolvedPage {
                    section_title,
                    page_label,
                    headers: spec.headers,
                    rows: spec.data,
                }
            })
            .collect();

        Self { title, pages }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageSpec;
    use serde_json::json;

    fn page(section_title: Option<&str>, page_label: Option<&str>) -> PageSpec {
        PageSpec {
            section_title: section_title.map(str::to_string),
            page_label: page_label.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_defaults_when_absent() {
        let doc = Document::from_payload(Payload::default());
        assert_eq!(doc.title, DEFAULT_TITLE);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_title_defaults_when_empty() {
        let doc = Document::from_payload(Payload {
            document_title: Some(String::new()),
            pages: vec![],
        });
        assert_eq!(doc.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_section_title_fallbacks() {
        let doc = Document::from_payload(Payload {
            document_title: Some("T".into()),
            pages: vec![
                page(None, None),
                page(Some(""), None),
                page(Some("null"), None),
                page(Some("Chapter 1"), None),
            ],
        });

        assert_eq!(doc.pages[0].section_title, "T");
        assert_eq!(doc.pages[1].section_title, "T");
        assert_eq!(doc.pages[2].section_title, "T");
        assert_eq!(doc.pages[3].section_title, "Chapter 1");
    }

    #[test]
    fn test_page_label_synthesized_when_absent() {
        let doc = Document::from_payload(Payload {
            document_title: Some("T".into()),
            pages: vec![page(None, None), page(None, None)],
        });

        assert_eq!(doc.pages[0].page_label.as_deref(), Some("p.1"));
        assert_eq!(doc.pages[1].page_label.as_deref(), Some("p.2"));
    }

    #[test]
    fn test_page_label_empty_suppressed() {
        let doc = Document::from_payload(Payload {
            document_title: Some("T".into()),
            pages: vec![page(None, Some(""))],
        });

        assert!(doc.pages[0].page_label.is_none());
    }

    #[test]
    fn test_page_label_explicit_kept_verbatim() {
        // Even a synthetic-looking label is kept as sent.
        let doc = Document::from_payload(Payload {
            document_title: Some("T".into()),
            pages: vec![page(None, Some("p.99"))],
        });

        assert_eq!(doc.pages[0].page_label.as_deref(), Some("p.99"));
    }

    #[test]
    fn test_rows_and_headers_pass_through() {
        let doc = Document::from_payload(Payload {
            document_title: Some("T".into()),
            pages: vec![PageSpec {
                headers: vec!["A".into(), "B".into()],
                data: vec![vec![json!("x"), json!(1)]],
                ..Default::default()
            }],
        });

        assert!(doc.pages[0].has_table());
        assert_eq!(doc.pages[0].row_count(), 1);
        assert_eq!(doc.pages[0].rows[0][1], json!(1));
    }
}
