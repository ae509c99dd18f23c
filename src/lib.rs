//! # suratfmt
//!
//! Formal-letter extraction and layout library for Rust.
//!
//! This library takes a free-form letter draft, classifies its
//! paragraphs into the canonical Malaysian formal-letter structure,
//! normalizes the layout (separator rule, right-aligned date,
//! underlined subject), and paginates the result onto an abstract page
//! canvas with a generation footer on every page.
//!
//! ## Quick Start
//!
//! ```
//! use suratfmt::{tree_from_text, Suratfmt};
//!
//! fn main() -> suratfmt::Result<()> {
//!     let draft = "\
//! Ahmad bin Abdullah
//! 123 Jalan Tun Razak
//!
//! To the Director
//!
//! 15 January 2025
//!
//! Dear Sir/Madam,
//!
//! Re: Road Damage Complaint
//!
//! The road near my house has large potholes.
//!
//! Yours faithfully,
//!
//! Ahmad bin Abdullah";
//!
//!     let result = Suratfmt::new().format_text(draft)?;
//!     println!("{}", result.structure().to_json_pretty()?);
//!     println!("{}", result.to_text()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heuristic classification**: sender, recipient, date, subject,
//!   salutation, body, closing, signature
//! - **Structure normalization**: idempotent tree repairs toward the
//!   formal layout convention
//! - **Pagination**: automatic page breaks with per-page footers
//! - **Pluggable canvas**: render onto any [`render::PageCanvas`]
//!   backend; a text-grid backend ships for previews and tests

pub mod classify;
pub mod detect;
pub mod error;
pub mod model;
pub mod normalize;
pub mod render;

// Re-export commonly used types
pub use classify::{classify, classify_tree};
pub use detect::Detector;
pub use error::{Error, Result};
pub use model::{
    tree_from_text, Alignment, DocumentNode, InlineRun, Language, LetterMetadata, LetterStructure,
    LetterType, Paragraph,
};
pub use normalize::{check_format, normalize, normalize_structure, FormatWarning};
pub use render::{
    render, DrawStyle, FooterStamper, LayoutOptions, PageCanvas, PageRenderer, TextCanvas,
};

/// Classify a plain-text draft into a letter structure.
///
/// # Example
///
/// ```
/// let structure = suratfmt::classify_text("Dear Sir,\n\nHello.\n\nYours faithfully,");
/// assert_eq!(structure.salutation, "Dear Sir,");
/// ```
pub fn classify_text(text: &str) -> LetterStructure {
    classify_tree(&tree_from_text(text))
}

/// Normalize a plain-text draft and render it to a text-grid preview.
///
/// Convenience for the full pipeline with defaults; use [`Suratfmt`]
/// for control over metadata and layout.
pub fn format_text(text: &str) -> Result<String> {
    Suratfmt::new().format_text(text)?.to_text()
}

/// Render a document tree to A4 text-grid pages.
///
/// One string per page. The tree is rendered as given; normalize first
/// if the formal layout repairs are wanted.
pub fn render_to_text(tree: &[DocumentNode], metadata: &LetterMetadata) -> Result<Vec<String>> {
    let mut canvas = TextCanvas::a4();
    render(tree, &mut canvas, metadata, &LayoutOptions::default())?;
    Ok(canvas.pages())
}

/// Builder for classifying, normalizing, and rendering letters.
///
/// # Example
///
/// ```
/// use suratfmt::{Language, LetterType, Suratfmt};
///
/// let result = Suratfmt::new()
///     .with_letter_type(LetterType::Complaint)
///     .with_language(Language::En)
///     .format_text("Dear Sir,\n\nThe road is damaged.\n\nYours faithfully,")?;
/// let preview = result.to_text()?;
/// # Ok::<(), suratfmt::Error>(())
/// ```
pub struct Suratfmt {
    options: LayoutOptions,
    metadata: LetterMetadata,
    normalize: bool,
}

impl Suratfmt {
    /// Create a new builder with default layout and empty metadata.
    pub fn new() -> Self {
        Self {
            options: LayoutOptions::default(),
            metadata: LetterMetadata::default(),
            normalize: true,
        }
    }

    /// Set the letter type shown in the footer.
    pub fn with_letter_type(mut self, letter_type: LetterType) -> Self {
        self.metadata.letter_type = Some(letter_type);
        self
    }

    /// Set the letter language shown in the footer.
    pub fn with_language(mut self, language: Language) -> Self {
        self.metadata.language = Some(language);
        self
    }

    /// Replace the layout options.
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the product name shown in the footer.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.options.product = product.into();
        self
    }

    /// Render the tree as given, skipping normalization.
    pub fn raw(mut self) -> Self {
        self.normalize = false;
        self
    }

    /// Process a plain-text draft.
    pub fn format_text(self, text: &str) -> Result<SuratfmtResult> {
        let tree = tree_from_text(text);
        self.format_tree(tree)
    }

    /// Process an already-built document tree.
    pub fn format_tree(self, tree: Vec<DocumentNode>) -> Result<SuratfmtResult> {
        let tree = if self.normalize {
            normalize(&tree)
        } else {
            tree
        };
        let structure = normalize_structure(&classify_tree(&tree));
        Ok(SuratfmtResult {
            tree,
            structure,
            metadata: self.metadata,
            options: self.options,
        })
    }
}

impl Default for Suratfmt {
    fn default() -> Self {
        Self::new()
    }
}

/// A processed letter, ready to inspect or render.
pub struct SuratfmtResult {
    /// The (possibly normalized) document tree
    pub tree: Vec<DocumentNode>,
    structure: LetterStructure,
    metadata: LetterMetadata,
    options: LayoutOptions,
}

impl SuratfmtResult {
    /// The classified letter structure.
    pub fn structure(&self) -> &LetterStructure {
        &self.structure
    }

    /// Format warnings for the processed tree.
    pub fn warnings(&self) -> Vec<FormatWarning> {
        check_format(&self.tree)
    }

    /// Render onto a caller-provided canvas.
    pub fn render_onto<C: PageCanvas>(&self, canvas: &mut C) -> Result<()> {
        render::render(&self.tree, canvas, &self.metadata, &self.options)
    }

    /// Render to an A4 text-grid preview, pages separated by form feeds.
    pub fn to_text(&self) -> Result<String> {
        let mut canvas = TextCanvas::a4();
        self.render_onto(&mut canvas)?;
        Ok(canvas.pages().join("\u{c}\n"))
    }

    /// Serialize the classified structure to JSON.
    pub fn to_json(&self) -> Result<String> {
        self.structure.to_json()
    }
}
