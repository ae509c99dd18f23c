//! Integration tests for letter classification.

use suratfmt::{classify, classify_tree, tree_from_text};

const MALAY_DRAFT: &str = "\
Ahmad bin Abdullah
123 Jalan Tun Razak

DBKL
Jalan Raja Laut

15 Januari 2025

Tuan,

Perkara: Aduan Jalan Rosak

Saya ingin membuat aduan mengenai keadaan jalan yang rosak teruk di kawasan saya.

Jalan tersebut berlubang besar dan membahayakan pengguna jalan raya.

Yang benar,

Ahmad bin Abdullah";

#[test]
fn test_full_malay_complaint_letter() {
    let s = classify_tree(&tree_from_text(MALAY_DRAFT));

    assert_eq!(
        s.sender,
        vec!["Ahmad bin Abdullah".to_string(), "123 Jalan Tun Razak".to_string()]
    );
    assert_eq!(s.recipient_name, "DBKL");
    assert_eq!(s.recipient, vec!["Jalan Raja Laut".to_string()]);
    assert_eq!(s.date, "15 Januari 2025");
    assert_eq!(s.salutation, "Tuan,");
    assert_eq!(s.subject, "Aduan Jalan Rosak");
    assert_eq!(s.body.len(), 2);
    assert_eq!(s.closing, "Yang benar,");
    assert_eq!(s.signature_name, "Ahmad bin Abdullah");
}

#[test]
fn test_english_letter_with_recipient_opener() {
    let s = classify(&[
        "Ahmad bin Abdullah",
        "123 Jalan Tun Razak",
        "To the Director",
        "15 January 2025",
        "Dear Sir/Madam,",
        "Re: Road Damage Complaint",
        "The road near my house has large potholes.",
        "Yours faithfully,",
        "Ahmad bin Abdullah",
    ]);

    assert_eq!(s.date, "15 January 2025");
    assert_eq!(s.salutation, "Dear Sir/Madam,");
    assert_eq!(s.subject, "Road Damage Complaint");
    assert_eq!(s.body, vec!["The road near my house has large potholes.".to_string()]);
    assert_eq!(s.closing, "Yours faithfully,");
    assert_eq!(s.signature_name, "Ahmad bin Abdullah");
}

#[test]
fn test_every_paragraph_lands_in_one_slot() {
    let paragraphs = [
        "Ahmad bin Abdullah",
        "123 Jalan Tun Razak",
        "DBKL",
        "Jalan Raja Laut",
        "15 Januari 2025",
        "Tuan,",
        "Perkara: Aduan",
        "Isi surat.",
        "Yang benar,",
        "Ahmad",
    ];
    let s = classify(&paragraphs);
    assert_eq!(s.slot_count(), paragraphs.len());
}

#[test]
fn test_empty_input_yields_empty_structure() {
    assert!(classify::<&str>(&[]).is_empty());
    assert!(classify_tree(&[]).is_empty());
    assert!(classify(&["", "   ", "\t"]).is_empty());
}

#[test]
fn test_body_only_note() {
    // No formal markers at all: first short lines read as a sender
    // block, the long prose line lands in body.
    let s = classify(&[
        "Quick note",
        "I left the keys with the guard at the main entrance since nobody answered.",
    ]);
    assert_eq!(s.sender, vec!["Quick note".to_string()]);
    assert_eq!(s.body.len(), 1);
    assert!(s.salutation.is_empty());
    assert!(s.closing.is_empty());
}

#[test]
fn test_long_line_with_lexicon_phrase_is_body() {
    let s = classify(&[
        "Dear Sir,",
        "We send our best regards to your family and hope this letter finds everyone well.",
    ]);
    assert_eq!(s.salutation, "Dear Sir,");
    assert!(s.closing.is_empty());
    assert_eq!(s.body.len(), 1);
}

#[test]
fn test_subject_variants() {
    for (line, expected) in [
        ("Re: Road Damage", "Road Damage"),
        ("Subject: Proposal for Upgrade", "Proposal for Upgrade"),
        ("**Subject: Bold Marker**", "Bold Marker"),
        ("RUJUKAN: Permohonan Cuti", "Permohonan Cuti"),
    ] {
        let s = classify(&["Dear Sir,", line]);
        assert_eq!(s.subject, expected, "input line: {:?}", line);
    }
}

#[test]
fn test_date_after_salutation_still_extracted() {
    let s = classify(&["Dear Sir,", "Body paragraph.", "Written on 15/01/2025 in KL."]);
    assert_eq!(s.date, "Written on 15/01/2025 in KL.");
    assert_eq!(s.body, vec!["Body paragraph.".to_string()]);
}

#[test]
fn test_only_first_signature_line_kept() {
    let s = classify(&[
        "Tuan,",
        "Isi.",
        "Yang benar,",
        "Ahmad bin Abdullah",
        "Pengerusi Persatuan Penduduk",
    ]);
    assert_eq!(s.signature_name, "Ahmad bin Abdullah");
}
