//! Canonical letter structure and letter metadata.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The typed, section-labeled decomposition of a letter's paragraphs.
///
/// Built once per rendering or export request from a document tree
/// snapshot. Every input paragraph lands in exactly one slot; paragraphs
/// the classifier cannot place fall into `body`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LetterStructure {
    /// Sender block, at most 3 lines
    pub sender: Vec<String>,

    /// Recipient name (first bracketed recipient line)
    pub recipient_name: String,

    /// Recipient address lines
    pub recipient: Vec<String>,

    /// The letter date, verbatim as written
    pub date: String,

    /// Subject line with marker artifacts stripped
    pub subject: String,

    /// Salutation line
    pub salutation: String,

    /// Body paragraphs
    pub body: Vec<String>,

    /// Closing phrase
    pub closing: String,

    /// Signature name (single line)
    pub signature_name: String,
}

impl LetterStructure {
    /// Create an all-empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.sender.is_empty()
            && self.recipient_name.is_empty()
            && self.recipient.is_empty()
            && self.date.is_empty()
            && self.subject.is_empty()
            && self.salutation.is_empty()
            && self.body.is_empty()
            && self.closing.is_empty()
            && self.signature_name.is_empty()
    }

    /// Total number of paragraphs held across all slots.
    ///
    /// Single-line slots count 1 when non-empty. Together with the input
    /// length this checks the partition property: classification assigns
    /// each paragraph to exactly one slot.
    pub fn slot_count(&self) -> usize {
        let single = [
            &self.recipient_name,
            &self.date,
            &self.subject,
            &self.salutation,
            &self.closing,
            &self.signature_name,
        ];
        self.sender.len()
            + self.recipient.len()
            + self.body.len()
            + single.iter().filter(|s| !s.is_empty()).count()
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Letter metadata, used only for footer display text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LetterMetadata {
    /// Letter type, or `None` for the generic display fallback
    pub letter_type: Option<LetterType>,

    /// Letter language, or `None` for the English fallback
    pub language: Option<Language>,
}

impl LetterMetadata {
    /// Create metadata with a type and language.
    pub fn new(letter_type: LetterType, language: Language) -> Self {
        Self {
            letter_type: Some(letter_type),
            language: Some(language),
        }
    }

    /// Display text for the letter type, with a literal fallback.
    pub fn letter_type_display(&self) -> &'static str {
        match self.letter_type {
            Some(LetterType::Complaint) => "Complaint Letter",
            Some(LetterType::Proposal) => "Proposal",
            Some(LetterType::Mc) => "MC Letter",
            Some(LetterType::General) => "General Letter",
            Some(LetterType::Official) => "Official Letter",
            None => "Letter",
        }
    }

    /// Display text for the language, with an English fallback.
    pub fn language_display(&self) -> &'static str {
        match self.language {
            Some(Language::En) | None => "English",
            Some(Language::Ms) => "Bahasa Malaysia",
            Some(Language::Mixed) => "Mixed",
        }
    }
}

/// The kind of formal letter being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterType {
    /// Complaint letter
    Complaint,
    /// Proposal
    Proposal,
    /// Medical certificate cover letter
    Mc,
    /// General letter
    General,
    /// Official letter
    Official,
}

/// The letter's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Bahasa Malaysia
    Ms,
    /// Mixed English and Malay
    Mixed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_structure() {
        let s = LetterStructure::new();
        assert!(s.is_empty());
        assert_eq!(s.slot_count(), 0);
    }

    #[test]
    fn test_slot_count() {
        let s = LetterStructure {
            sender: vec!["a".into(), "b".into()],
            date: "15 January 2025".into(),
            body: vec!["c".into()],
            ..Default::default()
        };
        assert_eq!(s.slot_count(), 4);
    }

    #[test]
    fn test_metadata_display_fallbacks() {
        let meta = LetterMetadata::default();
        assert_eq!(meta.letter_type_display(), "Letter");
        assert_eq!(meta.language_display(), "English");

        let meta = LetterMetadata::new(LetterType::Complaint, Language::Ms);
        assert_eq!(meta.letter_type_display(), "Complaint Letter");
        assert_eq!(meta.language_display(), "Bahasa Malaysia");
    }

    #[test]
    fn test_structure_json_round_trip() {
        let s = LetterStructure {
            subject: "Road Damage Complaint".into(),
            ..Default::default()
        };
        let json = s.to_json().unwrap();
        let back: LetterStructure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
