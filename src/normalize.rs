//! Input normalization.
//!
//! Upstream producers are inconsistent about how they wrap a document
//! payload: some send the object directly, some wrap it in a one-element
//! batch array, and some double-encode the whole thing as a JSON string.
//! This module collapses all of those shapes into one canonical JSON
//! object by pattern-matching the value's variant and descending until an
//! object (or a dead end) is reached.

use log::warn;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Collapse an arbitrarily wrapped input value into a canonical mapping.
///
/// The descent consumes exactly one element per array layer and one parse
/// per string layer:
///
/// - a non-empty array is replaced by its first element (remaining batch
///   elements are discarded, see below),
/// - an empty array fails with [`Error::EmptyInput`],
/// - a string is parsed as JSON and re-enters the descent,
/// - anything that is not an object once unwrapped fails with
///   [`Error::InvalidStructure`] carrying the observed type name.
///
/// Normalizing an already-canonical mapping is a no-op, so the operation
/// is idempotent.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let wrapped = json!([[{ "document_title": "T" }]]);
/// let mapping = mkdocx::normalize::canonicalize(wrapped).unwrap();
/// assert_eq!(mapping["document_title"], "T");
/// ```
pub fn canonicalize(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Array(items) => {
            let mut items = items.into_iter();
            let first = items.next().ok_or(Error::EmptyInput)?;
            let discarded = items.len();
            if discarded > 0 {
                // Producers are expected to send exactly one logical
                // document per call; anything extra is dropped, not merged.
                warn!("batch wrapper carried {} extra elements, keeping only the first", discarded);
            }
            canonicalize(first)
        }
        Value::String(text) => {
            let parsed: Value = serde_json::from_str(&text)
                .map_err(|e| Error::MalformedPayload(format!("inner JSON string: {}", e)))?;
            canonicalize(parsed)
        }
        other => Err(Error::InvalidStructure(type_name(&other))),
    }
}

/// JSON type name used in diagnostics.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
