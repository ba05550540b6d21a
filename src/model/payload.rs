//! Canonical payload schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::normalize;

/// One document payload after all wrapping layers are stripped.
///
/// Every field is optional on the wire; unknown keys are ignored. Fallback
/// resolution happens later, in [`Document::from_payload`].
///
/// [`Document::from_payload`]: crate::model::Document::from_payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Payload {
    /// Document-wide title, also used as the first-page heading fallback
    pub document_title: Option<String>,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<PageSpec>,
}

impl Payload {
    /// Normalize an arbitrarily wrapped value and deserialize it into the
    /// payload schema.
    ///
    /// A value whose shape the schema cannot absorb (`pages` that is not an
    /// array, a non-string header, ...) fails with
    /// [`Error::MalformedPayload`].
    pub fn from_value(value: Value) -> Result<Self> {
        let mapping = normalize::canonicalize(value)?;
        serde_json::from_value(Value::Object(mapping))
            .map_err(|e| Error::MalformedPayload(e.to_string()))
    }

    /// Get the number of pages in the payload.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// One page as sent by the producer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSpec {
    /// Heading rendered at the top of the page
    pub section_title: Option<String>,

    /// Positional marker, independent of the output format's pagination
    pub page_label: Option<String>,

    /// Table header cells; an empty list means the page has no table
    #[serde(default)]
    pub headers: Vec<String>,

    /// Table rows; each row is a list of scalar values
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}
