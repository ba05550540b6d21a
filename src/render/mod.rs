//! Rendering module: block sequence → binary document package.

mod docx;

pub use docx::{DocxRenderer, FILE_EXTENSION, MIME_TYPE};
