//! DOCX rendering.
//!
//! Consumes the ordered block sequence and packs it into an OOXML word
//! document (a ZIP container of XML parts) via `docx-rs`. Every text run
//! sets the ASCII, high-ANSI, and East-Asian font fields to the configured
//! family; word processors take CJK glyphs from the East-Asian field.

use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, RunFonts, WidthType};

use crate::error::{Error, Result};
use crate::layout::{Alignment, Block, CellBlock, ParagraphBlock, TableBlock};

/// Media type of the produced package.
pub const MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// File extension for suggested filenames.
pub const FILE_EXTENSION: &str = "docx";

/// Body width in twentieths of a point (A4 with the encoder's default
/// margins); policy width ratios are scaled into this.
const TABLE_WIDTH_DXA: usize = 8504;

/// Renders a block sequence into DOCX bytes.
#[derive(Debug, Clone)]
pub struct DocxRenderer {
    font_family: String,
}

impl DocxRenderer {
    /// Create a renderer with the given font family.
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
        }
    }

    /// Render the block sequence into a packed document.
    pub fn render(&self, blocks: &[Block]) -> Result<Vec<u8>> {
        let mut docx = Docx::new();

        for block in blocks {
            docx = match block {
                Block::Paragraph(p) => docx.add_paragraph(self.paragraph(p)),
                Block::Table(t) => docx.add_table(self.table(t)),
                Block::PageBreak => docx.add_paragraph(
                    docx_rs::Paragraph::new()
                        .add_run(docx_rs::Run::new().add_break(BreakType::Page)),
                ),
            };
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|e| Error::Render(format!("failed to pack document: {}", e)))?;
        Ok(cursor.into_inner())
    }

    fn paragraph(&self, block: &ParagraphBlock) -> docx_rs::Paragraph {
        docx_rs::Paragraph::new()
            .add_run(self.run(&block.text, block.size, block.bold))
            .align(alignment_type(block.alignment))
    }

    fn table(&self, block: &TableBlock) -> docx_rs::Table {
        let widths = column_widths(block);

        let mut rows = Vec::with_capacity(block.rows.len() + 1);
        rows.push(self.row(&block.header, widths.as_deref()));
        for cells in &block.rows {
            rows.push(self.row(cells, widths.as_deref()));
        }

        let mut table = docx_rs::Table::new(rows);
        if let Some(widths) = widths {
            table = table.set_grid(widths);
        }
        table
    }

    fn row(&self, cells: &[CellBlock], widths: Option<&[usize]>) -> docx_rs::TableRow {
        let cells = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let mut tc = docx_rs::TableCell::new().add_paragraph(
                    docx_rs::Paragraph::new()
                        .add_run(self.run(&cell.text, cell.size, cell.bold))
                        .align(alignment_type(cell.alignment)),
                );
                if let Some(w) = widths.and_then(|ws| ws.get(i)) {
                    tc = tc.width(*w, WidthType::Dxa);
                }
                tc
            })
            .collect();
        docx_rs::TableRow::new(cells)
    }

    /// A text run carrying the full font override (general + East-Asian).
    fn run(&self, text: &str, size: u8, bold: bool) -> docx_rs::Run {
        let fonts = RunFonts::new()
            .ascii(self.font_family.as_str())
            .hi_ansi(self.font_family.as_str())
            .east_asia(self.font_family.as_str());
        // docx sizes are half-points
        let mut run = docx_rs::Run::new()
            .add_text(text)
            .fonts(fonts)
            .size(size as usize * 2);
        if bold {
            run = run.bold();
        }
        run
    }
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
    }
}

/// Scale the policy's width ratios into absolute DXA column widths.
fn column_widths(block: &TableBlock) -> Option<Vec<usize>> {
    let ratios = block.policy.widths.as_ref()?;
    if ratios.len() != block.column_count() {
        return None;
    }
    let total: f32 = ratios.iter().sum();
    if total <= 0.0 {
        return None;
    }
    Some(
        ratios
            .iter()
            .map(|r| (r / total * TABLE_WIDTH_DXA as f32) as usize)
            .collect(),
    )
}
