//! Error types for the mkdocx library.

use std::io;
use thiserror::Error;

/// Result type alias for mkdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a payload into a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The outer wrapping array has zero elements.
    #[error("Empty input: wrapping array has no elements")]
    EmptyInput,

    /// A string value failed JSON parsing, or the payload shape does not
    /// match the expected schema.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The fully unwrapped value is not a JSON object.
    #[error("Invalid structure: expected an object, found {0}")]
    InvalidStructure(&'static str),

    /// A page, row, or cell-size ceiling was exceeded.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// The document encoder failed to build or pack the output.
    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Whether the error was caused by the caller's input (as opposed to a
    /// failure while producing output).
    ///
    /// Ingress layers map client errors to a 4xx-style response and
    /// everything else to a 5xx-style response.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::MalformedPayload(_)
                | Error::InvalidStructure(_)
                | Error::PayloadTooLarge(_)
        )
    }
}
