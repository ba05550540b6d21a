//! Layout module: turns a resolved document into an ordered block sequence.
//!
//! Blocks are the unit of output structure handed to the renderer. The
//! builder walks the document page by page and applies the typographic
//! rules (sizes, weights, alignments); table width and alignment come from
//! the declarative [`PolicyTable`] keyed by column count.

mod block;
mod builder;
mod policy;

pub use block::{Alignment, Block, CellBlock, ParagraphBlock, TableBlock};
pub use builder::{build_blocks, LayoutBuilder, LayoutOptions};
pub use policy::{ColumnPolicy, PolicyTable};
