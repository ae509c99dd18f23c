//! Document model types.
//!
//! The document tree ([`DocumentNode`]) represents one letter's rich-text
//! content in reading order; the canonical structure ([`LetterStructure`])
//! is its section-labeled decomposition.

mod letter;
mod node;

pub use letter::{Language, LetterMetadata, LetterStructure, LetterType};
pub use node::{tree_from_text, Alignment, DocumentNode, InlineRun, Paragraph};
