//! Document tree types.

use serde::{Deserialize, Serialize};

/// A block-level node in the document tree.
///
/// Node order is document reading order. The classifier never reorders
/// nodes; only the normalizer may relocate a recognized date paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentNode {
    /// A paragraph of inline runs
    Paragraph(Paragraph),

    /// A horizontal separator rule
    Separator,

    /// A blank line between blocks
    LineBreak,

    /// A bulleted or numbered list
    List {
        /// Numbered list when true, bulleted otherwise
        ordered: bool,
        /// One run sequence per list item
        items: Vec<Vec<InlineRun>>,
    },

    /// A heading with a level from 1 to 6
    Heading {
        /// Heading level (1 = largest)
        level: u8,
        /// Heading content
        runs: Vec<InlineRun>,
    },

    /// Left content and right-anchored content sharing a baseline.
    ///
    /// Synthesized by the normalizer from a paragraph that carries a
    /// float-right run; never produced by an editor directly.
    PairedLine {
        /// Left-anchored content (address lines)
        left: Paragraph,
        /// Right-anchored content (the date)
        right: Paragraph,
    },
}

impl DocumentNode {
    /// Create a paragraph node from plain text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        DocumentNode::Paragraph(Paragraph::with_text(text))
    }

    /// Check if this node is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, DocumentNode::Paragraph(_))
    }

    /// Check if this node is a separator rule.
    pub fn is_separator(&self) -> bool {
        matches!(self, DocumentNode::Separator)
    }

    /// Get plain text content, if this node carries any.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            DocumentNode::Paragraph(p) => Some(p.plain_text()),
            DocumentNode::Heading { runs, .. } => Some(concat_runs(runs)),
            DocumentNode::List { items, .. } => Some(
                items
                    .iter()
                    .map(|runs| concat_runs(runs))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            DocumentNode::PairedLine { left, right } => {
                Some(format!("{}\n{}", left.plain_text(), right.plain_text()))
            }
            DocumentNode::Separator | DocumentNode::LineBreak => None,
        }
    }
}

/// A paragraph: an ordered sequence of styled runs plus block alignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline runs in reading order
    pub runs: Vec<InlineRun>,

    /// Explicit alignment, or `None` when the paragraph carries none.
    ///
    /// The distinction matters to the normalizer: a paragraph already
    /// aligned (by the editor or by a previous normalization) is left
    /// untouched.
    pub align: Option<Alignment>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![InlineRun::new(text)],
            align: None,
        }
    }

    /// Create a paragraph with an explicit alignment.
    pub fn aligned(text: impl Into<String>, align: Alignment) -> Self {
        Self {
            runs: vec![InlineRun::new(text)],
            align: Some(align),
        }
    }

    /// Add a run to the paragraph.
    pub fn add_run(&mut self, run: InlineRun) {
        self.runs.push(run);
    }

    /// Concatenated text of all runs, in order.
    pub fn plain_text(&self) -> String {
        concat_runs(&self.runs)
    }

    /// Check if the paragraph has no non-whitespace content.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.plain_text().trim().is_empty()
    }

    /// The alignment to draw with: explicit alignment or left.
    pub fn effective_align(&self) -> Alignment {
        self.align.unwrap_or(Alignment::Left)
    }

    /// Check if any run is marked float-right.
    pub fn has_float_right(&self) -> bool {
        self.runs.iter().any(|r| r.float_right)
    }

    /// Split into left content and right-anchored content.
    ///
    /// Float-right runs go to the right paragraph (flag cleared, aligned
    /// right); everything else stays on the left in order.
    pub fn split_float(&self) -> (Paragraph, Paragraph) {
        let mut left = Paragraph {
            runs: Vec::new(),
            align: self.align,
        };
        let mut right = Paragraph {
            runs: Vec::new(),
            align: Some(Alignment::Right),
        };
        for run in &self.runs {
            if run.float_right {
                let mut run = run.clone();
                run.float_right = false;
                right.runs.push(run);
            } else {
                left.runs.push(run.clone());
            }
        }
        (left, right)
    }

    /// Check if every non-empty run is underlined.
    pub fn is_underlined(&self) -> bool {
        let mut seen = false;
        for run in &self.runs {
            if run.text.trim().is_empty() {
                continue;
            }
            if !run.underline {
                return false;
            }
            seen = true;
        }
        seen
    }
}

fn concat_runs(runs: &[InlineRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

/// A run of text with consistent inline styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineRun {
    /// The text content. May contain `\n` for soft breaks within the
    /// paragraph (the editor's in-paragraph line breaks).
    pub text: String,

    /// Bold text
    #[serde(default)]
    pub bold: bool,

    /// Italic text
    #[serde(default)]
    pub italic: bool,

    /// Underlined text
    #[serde(default)]
    pub underline: bool,

    /// Right-anchored on the same line as the preceding left content
    #[serde(default)]
    pub float_right: bool,
}

impl InlineRun {
    /// Create a plain run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::new(text)
        }
    }

    /// Create an underlined run.
    pub fn underlined(text: impl Into<String>) -> Self {
        Self {
            underline: true,
            ..Self::new(text)
        }
    }

    /// Create a float-right run.
    pub fn floated(text: impl Into<String>) -> Self {
        Self {
            float_right: true,
            ..Self::new(text)
        }
    }
}

/// Block text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment (drawn as left; see render module)
    Justify,
}

/// Build a document tree from a plain-text draft.
///
/// Paragraphs are separated by blank lines. A line of three or more
/// `-`, `_`, or `=` characters becomes a [`DocumentNode::Separator`].
/// Single newlines inside a paragraph are kept as soft breaks in the
/// run text.
pub fn tree_from_text(text: &str) -> Vec<DocumentNode> {
    let mut nodes = Vec::new();

    for block in text.split("\n\n") {
        let trimmed = block.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_separator_line(trimmed) {
            nodes.push(DocumentNode::Separator);
            continue;
        }
        let lines: Vec<&str> = trimmed
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        nodes.push(DocumentNode::paragraph(lines.join("\n")));
    }

    nodes
}

fn is_separator_line(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| matches!(c, '-' | '_' | '='))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::with_text("Hello ");
        p.add_run(InlineRun::bold("world"));
        p.add_run(InlineRun::new("!"));
        assert_eq!(p.plain_text(), "Hello world!");
    }

    #[test]
    fn test_paragraph_empty() {
        assert!(Paragraph::new().is_empty());
        assert!(Paragraph::with_text("   ").is_empty());
        assert!(!Paragraph::with_text("x").is_empty());
    }

    #[test]
    fn test_effective_align() {
        let p = Paragraph::with_text("text");
        assert_eq!(p.effective_align(), Alignment::Left);

        let p = Paragraph::aligned("date", Alignment::Right);
        assert_eq!(p.effective_align(), Alignment::Right);
    }

    #[test]
    fn test_float_right_detection() {
        let mut p = Paragraph::with_text("DBKL\nJalan Raja Laut");
        assert!(!p.has_float_right());
        p.add_run(InlineRun::floated("15 January 2025"));
        assert!(p.has_float_right());
    }

    #[test]
    fn test_is_underlined() {
        let mut p = Paragraph::new();
        assert!(!p.is_underlined());

        p.add_run(InlineRun::underlined("Re: Complaint"));
        assert!(p.is_underlined());

        p.add_run(InlineRun::new("extra"));
        assert!(!p.is_underlined());
    }

    #[test]
    fn test_tree_from_text() {
        let tree = tree_from_text("Ahmad bin Abdullah\n123 Jalan Tun Razak\n\n---\n\nDBKL");
        assert_eq!(tree.len(), 3);
        assert_eq!(
            tree[0].plain_text().as_deref(),
            Some("Ahmad bin Abdullah\n123 Jalan Tun Razak")
        );
        assert!(tree[1].is_separator());
        assert_eq!(tree[2].plain_text().as_deref(), Some("DBKL"));
    }

    #[test]
    fn test_tree_from_text_skips_blank_blocks() {
        let tree = tree_from_text("\n\n  \n\nBody.\n\n");
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_node_plain_text() {
        let node = DocumentNode::List {
            ordered: true,
            items: vec![vec![InlineRun::new("first")], vec![InlineRun::new("second")]],
        };
        assert_eq!(node.plain_text().as_deref(), Some("first\nsecond"));
        assert_eq!(DocumentNode::Separator.plain_text(), None);
    }
}
