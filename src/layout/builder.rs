//! Layout builder: resolved document → ordered block sequence.

use log::debug;
use serde_json::Value;

use crate::model::{Document, ResolvedPage};

use super::{Alignment, Block, CellBlock, ParagraphBlock, PolicyTable, TableBlock};

/// Typographic options for the layout builder.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Section title size in points
    pub title_size: u8,

    /// Page label size in points
    pub label_size: u8,

    /// Table header cell size in points
    pub header_size: u8,

    /// Table body cell size in points
    pub body_size: u8,

    /// Column policies keyed by column count
    pub policies: PolicyTable,
}

impl LayoutOptions {
    /// Create layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section title size.
    pub fn with_title_size(mut self, size: u8) -> Self {
        self.title_size = size;
        self
    }

    /// Set the page label size.
    pub fn with_label_size(mut self, size: u8) -> Self {
        self.label_size = size;
        self
    }

    /// Set the table header cell size.
    pub fn with_header_size(mut self, size: u8) -> Self {
        self.header_size = size;
        self
    }

    /// Set the table body cell size.
    pub fn with_body_size(mut self, size: u8) -> Self {
        self.body_size = size;
        self
    }

    /// Set the column policy table.
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            title_size: 16,
            label_size: 9,
            header_size: 12,
            body_size: 11,
            policies: PolicyTable::standard(),
        }
    }
}

/// Builds the render block sequence for one document.
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    options: LayoutOptions,
}

impl LayoutBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with explicit options.
    pub fn with_options(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Build the ordered block sequence for a document.
    ///
    /// Per page: a centered bold title paragraph, an optional right-aligned
    /// label paragraph, an optional table, and a page break after every
    /// page except the last.
    pub fn build(&self, doc: &Document) -> Vec<Block> {
        let mut blocks = Vec::new();

        for (i, page) in doc.pages.iter().enumerate() {
            self.build_page(page, &mut blocks);
            if i + 1 < doc.pages.len() {
                blocks.push(Block::PageBreak);
            }
        }

        debug!(
            "laid out {} pages into {} blocks",
            doc.page_count(),
            blocks.len()
        );
        blocks
    }

    fn build_page(&self, page: &ResolvedPage, blocks: &mut Vec<Block>) {
        blocks.push(Block::Paragraph(ParagraphBlock::new(
            page.section_title.clone(),
            Alignment::Center,
            self.options.title_size,
            true,
        )));

        if let Some(label) = &page.page_label {
            blocks.push(Block::Paragraph(ParagraphBlock::new(
                format!("Page: {}", label),
                Alignment::Right,
                self.options.label_size,
                false,
            )));
        }

        if !page.headers.is_empty() {
            blocks.push(Block::Table(self.build_table(page)));
        }
    }

    fn build_table(&self, page: &ResolvedPage) -> TableBlock {
        let policy = self.options.policies.policy_for(page.headers.len()).clone();

        let header = page
            .headers
            .iter()
            .map(|text| {
                CellBlock::new(text.clone(), Alignment::Center, self.options.header_size, true)
            })
            .collect();

        let rows = page
            .rows
            .iter()
            .map(|row| {
                // Row width is independent of header width; render the
                // overlap and ignore the rest.
                let width = row.len().min(page.headers.len());
                row[..width]
                    .iter()
                    .enumerate()
                    .map(|(col, value)| {
                        CellBlock::new(
                            display_string(value),
                            policy.alignment(col),
                            self.options.body_size,
                            col == 0,
                        )
                    })
                    .collect()
            })
            .collect();

        TableBlock {
            header,
            rows,
            policy,
        }
    }
}

/// Build blocks for a document with default layout options.
pub fn build_blocks(doc: &Document) -> Vec<Block> {
    LayoutBuilder::new().build(doc)
}

/// Coerce a scalar cell value to its display string.
///
/// Strings render verbatim; everything else renders through its JSON text
/// (`1.5`, `true`, `null`).
fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageSpec, Payload};
    use serde_json::json;

    fn doc_with_pages(pages: Vec<PageSpec>) -> Document {
        Document::from_payload(Payload {
            document_title: Some("T".into()),
            pages,
        })
    }

    fn table_page(headers: &[&str], data: Vec<Vec<Value>>) -> PageSpec {
        PageSpec {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            data,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_page_layout_order() {
        let doc = doc_with_pages(vec![table_page(
            &["A", "B"],
            vec![vec![json!("x"), json!("y")]],
        )]);
        let blocks = build_blocks(&doc);

        // title, label (synthesized), table; no page break
        assert_eq!(blocks.len(), 3);

        match &blocks[0] {
            Block::Paragraph(p) => {
                assert_eq!(p.text, "T");
                assert_eq!(p.alignment, Alignment::Center);
                assert_eq!(p.size, 16);
                assert!(p.bold);
            }
            other => panic!("expected title paragraph, got {:?}", other),
        }

        match &blocks[1] {
            Block::Paragraph(p) => {
                assert_eq!(p.text, "Page: p.1");
                assert_eq!(p.alignment, Alignment::Right);
                assert_eq!(p.size, 9);
                assert!(!p.bold);
            }
            other => panic!("expected label paragraph, got {:?}", other),
        }

        match &blocks[2] {
            Block::Table(t) => {
                assert_eq!(t.column_count(), 2);
                assert!(t.header.iter().all(|c| c.bold && c.size == 12));
                assert!(t
                    .header
                    .iter()
                    .all(|c| c.alignment == Alignment::Center));
                assert!(t.rows[0][0].bold);
                assert!(!t.rows[0][1].bold);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_page_break_between_pages_only() {
        let doc = doc_with_pages(vec![
            PageSpec::default(),
            PageSpec::default(),
            PageSpec::default(),
        ]);
        let blocks = build_blocks(&doc);

        let breaks = blocks.iter().filter(|b| b.is_page_break()).count();
        assert_eq!(breaks, 2);
        assert!(!blocks.last().unwrap().is_page_break());
    }

    #[test]
    fn test_empty_document_has_no_blocks() {
        let doc = doc_with_pages(vec![]);
        assert!(build_blocks(&doc).is_empty());
    }

    #[test]
    fn test_suppressed_label_emits_no_paragraph() {
        let doc = doc_with_pages(vec![PageSpec {
            page_label: Some(String::new()),
            ..Default::default()
        }]);
        let blocks = build_blocks(&doc);

        // only the title paragraph
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_no_table_for_empty_headers() {
        let doc = doc_with_pages(vec![table_page(&[], vec![vec![json!("orphan")]])]);
        let blocks = build_blocks(&doc);

        assert!(blocks.iter().all(|b| !b.is_table()));
    }

    #[test]
    fn test_row_truncated_to_header_width() {
        let doc = doc_with_pages(vec![table_page(
            &["A", "B"],
            vec![vec![json!("x"), json!("y"), json!("extra")]],
        )]);
        let blocks = build_blocks(&doc);

        let table = blocks.iter().find_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        });
        assert_eq!(table.unwrap().rows[0].len(), 2);
    }

    #[test]
    fn test_short_row_kept_as_is() {
        let doc = doc_with_pages(vec![table_page(
            &["A", "B", "C"],
            vec![vec![json!("only")]],
        )]);
        let blocks = build_blocks(&doc);

        let table = blocks.iter().find_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        });
        assert_eq!(table.unwrap().rows[0].len(), 1);
    }

    #[test]
    fn test_three_column_alignments_applied() {
        let doc = doc_with_pages(vec![table_page(
            &["kw", "ex", "meaning"],
            vec![vec![json!("a"), json!("b"), json!("c")]],
        )]);
        let blocks = build_blocks(&doc);

        let table = blocks
            .iter()
            .find_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .unwrap();
        let row = &table.rows[0];
        assert_eq!(row[0].alignment, Alignment::Center);
        assert_eq!(row[1].alignment, Alignment::Left);
        assert_eq!(row[2].alignment, Alignment::Center);
    }

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(display_string(&json!("s")), "s");
        assert_eq!(display_string(&json!(1.5)), "1.5");
        assert_eq!(display_string(&json!(true)), "true");
        assert_eq!(display_string(&json!(null)), "null");
    }

    #[test]
    fn test_custom_sizes() {
        let builder = LayoutBuilder::with_options(
            LayoutOptions::new()
                .with_title_size(20)
                .with_label_size(8)
                .with_header_size(14)
                .with_body_size(10),
        );
        let doc = doc_with_pages(vec![table_page(&["A"], vec![vec![json!("x")]])]);
        let blocks = builder.build(&doc);

        match &blocks[0] {
            Block::Paragraph(p) => assert_eq!(p.size, 20),
            other => panic!("expected paragraph, got {:?}", other),
        }
        match &blocks[2] {
            Block::Table(t) => {
                assert_eq!(t.header[0].size, 14);
                assert_eq!(t.rows[0][0].size, 10);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }
}
