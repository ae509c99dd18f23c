//! Structural and lexical detection of letter markers.
//!
//! Everything here is heuristic, not semantic: dates, salutations,
//! closings, and subject markers are recognized from fixed lexicons and
//! patterns shared by the classifier and the normalizer.

use regex::Regex;

/// Salutation lexicon, matched as case-insensitive substrings.
const SALUTATIONS: &[&str] = &[
    "dear sir",
    "dear madam",
    "dear sir/madam",
    "tuan",
    "puan",
    "tuan/puan",
    "yang berhormat",
    "yb",
    "to whom",
];

/// Closing lexicon, matched as case-insensitive substrings.
const CLOSINGS: &[&str] = &[
    "yours faithfully",
    "yours sincerely",
    "yours truly",
    "sincerely",
    "regards",
    "best regards",
    "yang benar",
    "yang menurut perintah",
    "sekian terima kasih",
    "terima kasih",
];

/// Salutations and closings are short lines; anything longer is body text
/// even when it contains a lexicon phrase.
const MARKER_MAX_LEN: usize = 50;

/// Compiled marker patterns, built once per classification or
/// normalization pass.
#[derive(Debug)]
pub struct Detector {
    month_date: Regex,
    numeric_dmy: Regex,
    numeric_ymd: Regex,
    worded_date: Regex,
    subject_prefix: Regex,
    recipient_opener: Regex,
}

impl Detector {
    /// Compile the marker patterns.
    pub fn new() -> Self {
        Self {
            // Day number, English or Malay month name (abbreviated or
            // full), then a 2- or 4-digit year.
            month_date: Regex::new(
                r"(?i)\b\d{1,2}\s+(?:jan(?:uary|uari)?|feb(?:ruary|ruari)?|mac|mar(?:ch)?|apr(?:il)?|may|mei|jun(?:e)?|jul(?:y|ai)?|aug(?:ust)?|ogos|sep(?:t(?:ember)?)?|o[ck]t(?:ober)?|nov(?:ember)?|dec(?:ember)?|dis(?:ember)?)\.?\s+\d{2,4}\b",
            )
            .unwrap(),
            numeric_dmy: Regex::new(r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b").unwrap(),
            numeric_ymd: Regex::new(r"\b\d{4}[-/]\d{1,2}[-/]\d{1,2}\b").unwrap(),
            // "<word> D <word> Y", e.g. a weekday-prefixed Malay date.
            worded_date: Regex::new(r"(?i)\b[a-z]+\s+\d{1,2}\s+[a-z]+\s+\d{4}\b").unwrap(),
            subject_prefix: Regex::new(r"(?i)^(re|rujukan|subject|perkara)\s*:").unwrap(),
            recipient_opener: Regex::new(r"(?i)^(to|kepada|the\s)").unwrap(),
        }
    }

    /// Check if the text contains a recognizable date.
    pub fn is_date(&self, text: &str) -> bool {
        self.month_date.is_match(text)
            || self.numeric_dmy.is_match(text)
            || self.numeric_ymd.is_match(text)
            || self.worded_date.is_match(text)
    }

    /// Check if the text is a subject line (classifier form).
    pub fn is_subject(&self, text: &str) -> bool {
        let lower = text.trim().to_lowercase();
        lower.starts_with("re:")
            || lower.starts_with("rujukan:")
            || lower.starts_with("subject:")
            || lower.contains("**subject")
    }

    /// Check if the text starts with a subject marker prefix
    /// (normalizer form: `re:`, `rujukan:`, `subject:`, `perkara:`).
    pub fn has_subject_prefix(&self, text: &str) -> bool {
        self.subject_prefix.is_match(text.trim())
    }

    /// Subject text with the marker prefix and bold artifacts stripped.
    pub fn subject_text(&self, text: &str) -> String {
        let cleaned = text.replace("**", "");
        let cleaned = cleaned.trim();
        match self.subject_prefix.find(cleaned) {
            Some(m) => cleaned[m.end()..].trim().to_string(),
            None => cleaned.to_string(),
        }
    }

    /// Check if the text is a salutation line.
    pub fn is_salutation(&self, text: &str) -> bool {
        contains_marker(text, SALUTATIONS)
    }

    /// Check if the text is a closing phrase.
    pub fn is_closing(&self, text: &str) -> bool {
        contains_marker(text, CLOSINGS)
    }

    /// Check if the text opens a recipient block (`to`, `kepada`,
    /// `the ...`).
    pub fn is_recipient_opener(&self, text: &str) -> bool {
        self.recipient_opener.is_match(text.trim())
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_marker(text: &str, lexicon: &[&str]) -> bool {
    if text.len() >= MARKER_MAX_LEN {
        return false;
    }
    let lower = text.trim().to_lowercase();
    lexicon.iter().any(|marker| lower.contains(marker))
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
