//! Heuristic classification of letter paragraphs into canonical slots.

use log::debug;

use crate::detect::Detector;
use crate::model::{DocumentNode, LetterStructure};

/// Sender lines are capped; a formal letter's sender block is short and
/// anything past the cap belongs to the recipient or body.
const MAX_SENDER_LINES: usize = 3;

/// Lines at or above this length are body prose, not address lines.
const ADDRESS_MAX_LEN: usize = 50;

/// The classifier's current-section cursor.
///
/// Transitions are one-directional (sender → recipient → body →
/// signature) and never revert: a formal letter's sections appear in that
/// relative order exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Sender,
    Recipient,
    Body,
    Signature,
}

/// Classify the plain-text paragraphs of a letter, in reading order,
/// into a [`LetterStructure`].
///
/// No paragraph is ever rejected: date, subject, salutation, and closing
/// markers are recognized wherever they appear, and anything
/// unclassifiable lands in `body`. Empty input yields an all-empty
/// structure.
pub fn classify<S: AsRef<str>>(paragraphs: &[S]) -> LetterStructure {
    let detector = Detector::new();
    let mut structure = LetterStructure::new();
    let mut section = Section::Sender;
    let mut found_salutation = false;

    for para in paragraphs {
        let para = para.as_ref().trim();
        if para.is_empty() {
            continue;
        }

        // Structural markers are checked before section routing so they
        // are recognized even out of the expected order.
        if detector.is_date(para) {
            // First match wins; later date lines are still consumed.
            if structure.date.is_empty() {
                structure.date = para.to_string();
            }
            continue;
        }

        if detector.is_subject(para) {
            structure.subject = detector.subject_text(para);
            continue;
        }

        if !found_salutation && detector.is_salutation(para) {
            structure.salutation = para.to_string();
            found_salutation = true;
            section = Section::Body;
            debug!("salutation found, section -> body");
            continue;
        }

        if detector.is_closing(para) {
            structure.closing = para.to_string();
            section = Section::Signature;
            debug!("closing found, section -> signature");
            continue;
        }

        match section {
            Section::Sender => {
                let bracketed = para.contains('[');
                let short = para.len() < ADDRESS_MAX_LEN;
                let room = structure.sender.len() < MAX_SENDER_LINES;

                if room && !org_name_line(para) && (bracketed || short) {
                    structure.sender.push(para.to_string());
                } else if bracketed {
                    // Placeholder draft: the bracketed line opens the
                    // recipient block.
                    section = Section::Recipient;
                    structure.recipient.push(para.to_string());
                    debug!("section -> recipient (bracketed line)");
                } else if org_name_line(para) {
                    // An organization-style line (all caps, short) reads
                    // as the recipient name even without placeholders.
                    section = Section::Recipient;
                    structure.recipient_name = para.to_string();
                    debug!("section -> recipient (organization line)");
                } else {
                    section = Section::Body;
                    structure.body.push(para.to_string());
                    debug!("section -> body (no recipient signal)");
                }
            }
            Section::Recipient if !found_salutation => {
                if para.contains('[') {
                    if structure.recipient_name.is_empty() {
                        structure.recipient_name = para.to_string();
                    } else {
                        structure.recipient.push(para.to_string());
                    }
                } else if !structure.recipient_name.is_empty() && para.len() < ADDRESS_MAX_LEN {
                    // Address lines following a recognized recipient name.
                    structure.recipient.push(para.to_string());
                } else {
                    section = Section::Body;
                    structure.body.push(para.to_string());
                    debug!("section -> body (unrecognized recipient line)");
                }
            }
            Section::Recipient | Section::Body => {
                structure.body.push(para.to_string());
            }
            Section::Signature => {
                // Only one signature line is retained.
                if structure.signature_name.is_empty() {
                    structure.signature_name = para.to_string();
                }
            }
        }
    }

    structure
}

/// Classify the non-empty paragraph-like nodes of a document tree.
pub fn classify_tree(tree: &[DocumentNode]) -> LetterStructure {
    let paragraphs: Vec<String> = tree
        .iter()
        .filter_map(|node| node.plain_text())
        .flat_map(|text| {
            // Soft breaks inside a paragraph are separate lines to the
            // classifier, matching how the editor shows them.
            text.lines().map(str::to_string).collect::<Vec<_>>()
        })
        .filter(|line| !line.trim().is_empty())
        .collect();
    classify(&paragraphs)
}

/// A short line in all capitals reads as an organization name
/// ("DBKL", "JABATAN KERJA RAYA"), the usual start of a recipient block.
fn org_name_line(text: &str) -> bool {
    text.len() < ADDRESS_MAX_LEN
        && text.chars().any(|c| c.is_alphabetic())
        && !text.chars().any(|c| c.is_lowercase())
        && !text.contains('[')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineRun;

    #[test]
    fn test_classify_empty_input() {
        let structure = classify::<&str>(&[]);
        assert!(structure.is_empty());
    }

    #[test]
    fn test_classify_partition() {
        let paragraphs = [
            "Ahmad bin Abdullah",
            "15 January 2025",
            "Dear Sir/Madam,",
            "Body paragraph one.",
            "Body paragraph two.",
            "Yours faithfully,",
            "Ahmad",
        ];
        let s = classify(&paragraphs);
        assert_eq!(s.slot_count(), paragraphs.len());
    }

    #[test]
    fn test_signature_extra_lines_dropped() {
        let s = classify(&[
            "Dear Sir,",
            "Body.",
            "Yours sincerely,",
            "Ahmad",
            "012-3456789",
        ]);
        assert_eq!(s.signature_name, "Ahmad");
        // The extra contact line is dropped, not misfiled.
        assert_eq!(s.body, vec!["Body.".to_string()]);
    }

    #[test]
    fn test_bracketed_placeholder_draft() {
        let s = classify(&[
            "[Your Name]",
            "[Your Address]",
            "[City, Postcode]",
            "[Recipient Name]",
            "[Recipient Address]",
            "Tuan,",
            "Kandungan surat.",
            "Yang benar,",
            "[Your Name]",
        ]);
        assert_eq!(s.sender.len(), 3);
        assert_eq!(s.recipient.first().map(String::as_str), Some("[Recipient Name]"));
        assert_eq!(s.salutation, "Tuan,");
        assert_eq!(s.closing, "Yang benar,");
        assert_eq!(s.signature_name, "[Your Name]");
    }

    #[test]
    fn test_no_recipient_signal_goes_to_body() {
        let s = classify(&[
            "Ahmad bin Abdullah",
            "No 12, Jalan Mawar",
            "Taman Indah",
            "I am writing to complain about the drainage system in my neighborhood area.",
        ]);
        assert_eq!(s.sender.len(), 3);
        assert!(s.recipient_name.is_empty());
        assert_eq!(s.body.len(), 1);
    }

    #[test]
    fn test_date_recognized_anywhere() {
        let s = classify(&["Dear Sir,", "Some body text.", "15/01/2025", "More body."]);
        assert_eq!(s.date, "15/01/2025");
        assert_eq!(s.body, vec!["Some body text.".to_string(), "More body.".to_string()]);
    }

    #[test]
    fn test_classify_tree_flattens_soft_breaks() {
        let tree = vec![
            DocumentNode::paragraph("Ahmad bin Abdullah\n123 Jalan Tun Razak"),
            DocumentNode::Separator,
            DocumentNode::paragraph("Dear Sir/Madam,"),
            DocumentNode::Paragraph(crate::model::Paragraph {
                runs: vec![InlineRun::new("The road has potholes.")],
                align: None,
            }),
        ];
        let s = classify_tree(&tree);
        assert_eq!(s.sender.len(), 2);
        assert_eq!(s.salutation, "Dear Sir/Madam,");
        assert_eq!(s.body, vec!["The road has potholes.".to_string()]);
    }

    #[test]
    fn test_org_name_line() {
        assert!(org_name_line("DBKL"));
        assert!(org_name_line("JABATAN KERJA RAYA"));
        assert!(!org_name_line("Ahmad bin Abdullah"));
        assert!(!org_name_line("123 Jalan Tun Razak"));
        assert!(!org_name_line("[RECIPIENT]"));
    }
}
