//! Export service: the full pipeline behind one entry point.
//!
//! An [`Exporter`] is constructed once per process from explicit
//! configuration and shared by reference across requests; it holds no
//! mutable state, so conversions may run concurrently.

use log::debug;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::layout::{LayoutBuilder, LayoutOptions};
use crate::model::{Document, Payload};
use crate::render::{DocxRenderer, FILE_EXTENSION, MIME_TYPE};

/// Default font family (Microsoft JhengHei, the upstream pipeline's
/// Traditional-Chinese face).
pub const DEFAULT_FONT_FAMILY: &str = "微軟正黑體";

/// Resource ceilings enforced before model building.
///
/// Checked against the canonical payload before any model or render work
/// happens, bounding memory and CPU against pathological inputs.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum number of pages
    pub max_pages: usize,

    /// Maximum number of data rows per page
    pub max_rows_per_page: usize,

    /// Maximum characters per cell or header
    pub max_cell_chars: usize,
}

impl Limits {
    /// Create limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page ceiling.
    pub fn with_max_pages(mut self, max: usize) -> Self {
        self.max_pages = max;
        self
    }

    /// Set the per-page row ceiling.
    pub fn with_max_rows_per_page(mut self, max: usize) -> Self {
        self.max_rows_per_page = max;
        self
    }

    /// Set the cell text ceiling.
    pub fn with_max_cell_chars(mut self, max: usize) -> Self {
        self.max_cell_chars = max;
        self
    }

    /// Check a canonical payload against the ceilings.
    pub fn check(&self, payload: &Payload) -> Result<()> {
        if payload.pages.len() > self.max_pages {
            return Err(Error::PayloadTooLarge(format!(
                "{} pages exceeds the limit of {}",
                payload.pages.len(),
                self.max_pages
            )));
        }
        for (i, page) in payload.pages.iter().enumerate() {
            if page.data.len() > self.max_rows_per_page {
                return Err(Error::PayloadTooLarge(format!(
                    "page {} has {} rows, limit is {}",
                    i + 1,
                    page.data.len(),
                    self.max_rows_per_page
                )));
            }
            let oversized = page
                .headers
                .iter()
                .map(String::as_str)
                .chain(
                    page.data
                        .iter()
                        .flatten()
                        .filter_map(Value::as_str),
                )
                .any(|text| text.chars().count() > self.max_cell_chars);
            if oversized {
                return Err(Error::PayloadTooLarge(format!(
                    "page {} carries a cell longer than {} characters",
                    i + 1,
                    self.max_cell_chars
                )));
            }
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_pages: 500,
            max_rows_per_page: 10_000,
            max_cell_chars: 65_536,
        }
    }
}

/// Options for the export service.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Font family applied to every run (general + East-Asian fields)
    pub font_family: String,

    /// Typographic layout options
    pub layout: LayoutOptions,

    /// Resource ceilings
    pub limits: Limits,
}

impl ExportOptions {
    /// Create export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set layout options.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Set resource ceilings.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            layout: LayoutOptions::default(),
            limits: Limits::default(),
        }
    }
}

/// A finished export: document bytes plus the suggested filename.
#[derive(Debug, Clone)]
pub struct Export {
    /// Packed DOCX bytes
    pub bytes: Vec<u8>,

    /// Suggested download filename, derived from the document title
    pub filename: String,
}

impl Export {
    /// Media type of the packed document.
    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }
}

/// The export service: normalize → resolve → lay out → render.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create an exporter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with explicit options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Export a raw JSON value.
    ///
    /// The value may be the payload object itself, wrapped in array
    /// layers, or a JSON-encoded string of either.
    pub fn export_value(&self, value: Value) -> Result<Export> {
        let payload = Payload::from_value(value)?;
        self.options.limits.check(&payload)?;

        let doc = Document::from_payload(payload);
        debug!("exporting \"{}\" ({} pages)", doc.title, doc.page_count());

        let blocks = LayoutBuilder::with_options(self.options.layout.clone()).build(&doc);
        let bytes = DocxRenderer::new(self.options.font_family.clone()).render(&blocks)?;

        Ok(Export {
            bytes,
            filename: format!("{}.{}", sanitize_filename(&doc.title), FILE_EXTENSION),
        })
    }

    /// Export from JSON text (request-body ingress).
    pub fn export_str(&self, text: &str) -> Result<Export> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| Error::MalformedPayload(e.to_string()))?;
        self.export_value(value)
    }

    /// Export from raw bytes (file-upload ingress).
    ///
    /// Bytes are decoded as UTF-8 text, then parsed as JSON.
    pub fn export_bytes(&self, data: &[u8]) -> Result<Export> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::MalformedPayload(format!("not valid UTF-8: {}", e)))?;
        self.export_str(text)
    }

    /// Get the configured options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }
}

/// Replace filesystem-unsafe characters in a title.
///
/// Path separators and control characters must not survive into a
/// suggested filename; whitespace is folded to underscores as well.
fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
