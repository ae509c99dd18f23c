//! Structural normalization of a letter to the formal layout convention.
//!
//! Two modes share one outcome: tree-surgery mode rewrites the document
//! tree (separator present, date right-aligned beside the recipient
//! block, subject underlined) without touching any text content;
//! string-level mode applies the equivalent repairs to an already
//! classified [`LetterStructure`].
//!
//! All passes are pure rebuilds: the input tree is never mutated, and
//! normalizing an already-normalized tree returns an identical tree.

use log::{debug, warn};

use crate::detect::{normalize_ws, Detector};
use crate::model::{Alignment, DocumentNode, LetterStructure};

/// Normalize a document tree to the formal letter layout.
///
/// Applied once, in order: right-align recognized dates, underline the
/// subject line, insert a missing separator before the recipient block,
/// relocate the date next to the recipient, and fold float-right
/// paragraphs into [`DocumentNode::PairedLine`] nodes.
pub fn normalize(tree: &[DocumentNode]) -> Vec<DocumentNode> {
    let detector = Detector::new();
    let mut nodes = tree.to_vec();

    align_dates(&mut nodes, &detector);
    underline_subject(&mut nodes, &detector);
    insert_separator(&mut nodes, &detector);
    relocate_date(&mut nodes, &detector);
    pair_floats(&mut nodes);

    nodes
}

/// Right-align every date paragraph that carries no explicit alignment.
fn align_dates(nodes: &mut [DocumentNode], detector: &Detector) {
    for node in nodes.iter_mut() {
        if let DocumentNode::Paragraph(p) = node {
            if p.align.is_none() && !p.is_empty() && detector.is_date(&normalize_ws(&p.plain_text()))
            {
                p.align = Some(Alignment::Right);
            }
        }
    }
}

/// Underline the first subject-marker paragraph, if not already underlined.
fn underline_subject(nodes: &mut [DocumentNode], detector: &Detector) {
    for node in nodes.iter_mut() {
        if let DocumentNode::Paragraph(p) = node {
            if p.is_empty() || !detector.has_subject_prefix(&normalize_ws(&p.plain_text())) {
                continue;
            }
            if !p.is_underlined() {
                for run in &mut p.runs {
                    run.underline = true;
                }
            }
            return;
        }
    }
}

/// Insert a separator before the recipient block when none exists.
///
/// The insertion point is the earliest of the first recipient-opener,
/// date, or salutation paragraph, skipping any that are absent or sit at
/// the very top (a separator belongs after the sender block, never
/// first).
fn insert_separator(nodes: &mut Vec<DocumentNode>, detector: &Detector) {
    if nodes.iter().any(DocumentNode::is_separator) {
        return;
    }

    let recipient = find_paragraph(nodes, |t| detector.is_recipient_opener(t));
    let date = find_paragraph(nodes, |t| detector.is_date(t));
    let salutation = find_paragraph(nodes, |t| detector.is_salutation(t));

    let target = [recipient, date, salutation]
        .into_iter()
        .flatten()
        .filter(|&(para_idx, _)| para_idx > 0)
        .map(|(_, node_idx)| node_idx)
        .min();

    if let Some(node_idx) = target {
        debug!("inserting separator before node {}", node_idx);
        nodes.insert(node_idx, DocumentNode::Separator);
    }
}

/// Move the date paragraph to directly follow the recipient paragraph,
/// or the separator when no recipient paragraph is recognized.
fn relocate_date(nodes: &mut Vec<DocumentNode>, detector: &Detector) {
    let date_idx = match find_paragraph(nodes, |t| detector.is_date(t)) {
        Some((_, idx)) => idx,
        None => return,
    };
    if !nodes.iter().any(DocumentNode::is_separator) {
        return;
    }

    let date_node = nodes.remove(date_idx);

    let anchor = find_paragraph(nodes, |t| detector.is_recipient_opener(t))
        .map(|(_, idx)| idx)
        .or_else(|| nodes.iter().position(DocumentNode::is_separator));

    match anchor {
        Some(idx) => nodes.insert(idx + 1, date_node),
        // Anchor vanished with the removal; put the date back.
        None => nodes.insert(date_idx, date_node),
    }
}

/// Fold each float-right paragraph into a `PairedLine` node.
fn pair_floats(nodes: &mut Vec<DocumentNode>) {
    for node in nodes.iter_mut() {
        let para = match node {
            DocumentNode::Paragraph(p) if p.has_float_right() => p,
            _ => continue,
        };

        let (left, right) = para.split_float();
        *node = DocumentNode::PairedLine { left, right };
    }
}

/// Find the first non-empty paragraph whose normalized text matches,
/// returning `(paragraph index, node index)`.
fn find_paragraph(
    nodes: &[DocumentNode],
    pred: impl Fn(&str) -> bool,
) -> Option<(usize, usize)> {
    let mut para_idx = 0;
    for (node_idx, node) in nodes.iter().enumerate() {
        if let DocumentNode::Paragraph(p) = node {
            if p.is_empty() {
                continue;
            }
            if pred(&normalize_ws(&p.plain_text())) {
                return Some((para_idx, node_idx));
            }
            para_idx += 1;
        }
    }
    None
}

/// Normalize an already classified structure (string-level mode).
///
/// Trims every slot, strips marker prefixes and bold artifacts from the
/// subject, and rescues a date line misfiled into the body. Body order
/// is otherwise preserved.
pub fn normalize_structure(structure: &LetterStructure) -> LetterStructure {
    let detector = Detector::new();
    let mut out = structure.clone();

    let trim_vec = |v: &mut Vec<String>| {
        for s in v.iter_mut() {
            *s = s.trim().to_string();
        }
        v.retain(|s| !s.is_empty());
    };
    trim_vec(&mut out.sender);
    trim_vec(&mut out.recipient);
    trim_vec(&mut out.body);
    for field in [
        &mut out.recipient_name,
        &mut out.date,
        &mut out.salutation,
        &mut out.closing,
        &mut out.signature_name,
    ] {
        *field = field.trim().to_string();
    }

    out.subject = detector.subject_text(&out.subject);

    if out.date.is_empty() {
        if let Some(pos) = out.body.iter().position(|p| detector.is_date(p)) {
            out.date = out.body.remove(pos);
            debug!("moved date line out of body");
        }
    }

    out
}

/// Advisory findings from [`check_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatWarning {
    /// No separator rule between sender and recipient blocks
    MissingSeparator,
    /// No recognizable subject line
    MissingSubject,
    /// No recognizable salutation
    MissingSalutation,
}

/// Check a tree for the expected formal letter elements.
///
/// Non-fatal: missing elements are reported (and logged) so callers can
/// surface them, but the letter still renders.
pub fn check_format(tree: &[DocumentNode]) -> Vec<FormatWarning> {
    let detector = Detector::new();
    let mut warnings = Vec::new();

    if !tree.iter().any(DocumentNode::is_separator) {
        warnings.push(FormatWarning::MissingSeparator);
    }
    if find_paragraph(tree, |t| detector.has_subject_prefix(t)).is_none() {
        warnings.push(FormatWarning::MissingSubject);
    }
    if find_paragraph(tree, |t| detector.is_salutation(t)).is_none() {
        warnings.push(FormatWarning::MissingSalutation);
    }

    for w in &warnings {
        match w {
            FormatWarning::MissingSeparator => warn!("letter has no separator rule"),
            FormatWarning::MissingSubject => warn!("letter has no subject line"),
            FormatWarning::MissingSalutation => warn!("letter has no salutation"),
        }
    }

    warnings
}
