use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let src = Source::new("");
    assert_eq!(src.len(), 0);
    assert!(src.is_empty());
    assert!(src.as_bytes().is_empty());
    assert!(src.encoding_issues().is_empty());
}

#[test]
fn ascii_source() {
    let src = Source::new("SELECT 1;");
    assert_eq!(src.len(), 9);
    assert_eq!(src.as_bytes(), b"SELECT 1;");
    assert!(src.encoding_issues().is_empty());
}

#[test]
fn borrows_without_copying() {
    let text = "SELECT * FROM t";
    let src = Source::new(text);
    assert!(std::ptr::eq(src.as_bytes(), text.as_bytes()));
}

#[test]
fn utf8_multibyte_source_has_no_issues() {
    let src = Source::new("SELECT 'caf\u{e9}' FROM t\u{1F600}");
    assert!(src.encoding_issues().is_empty());
}

// === BOM Detection ===

#[test]
fn utf8_bom_detected() {
    let src = Source::new("\u{FEFF}SELECT 1");
    assert_eq!(
        src.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn utf16_boms_detected_in_byte_input() {
    let le = Source::from_bytes(&[0xFF, 0xFE, b'S']);
    assert_eq!(le.encoding_issues()[0].kind, EncodingIssueKind::Utf16LeBom);

    let be = Source::from_bytes(&[0xFE, 0xFF, b'S']);
    assert_eq!(be.encoding_issues()[0].kind, EncodingIssueKind::Utf16BeBom);
}

// === Interior Nulls ===

#[test]
fn interior_nulls_detected() {
    let src = Source::new("a\0b\0");
    let positions: Vec<usize> = src
        .encoding_issues()
        .iter()
        .filter(|i| i.kind == EncodingIssueKind::InteriorNull)
        .map(|i| i.pos)
        .collect();
    assert_eq!(positions, vec![1, 3]);
}

// === Replacement Characters ===

#[test]
fn replacement_char_detected() {
    let src = Source::new("select * from  \u{FFFD}E;");
    assert_eq!(
        src.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::ReplacementChar,
            pos: 15,
            len: 3,
        }]
    );
}

// === Invalid UTF-8 ===

#[test]
fn invalid_utf8_sequences_detected() {
    let src = Source::from_bytes(b"select \xC3\x28 from \xFF;");
    let invalid: Vec<(usize, usize)> = src
        .encoding_issues()
        .iter()
        .filter(|i| i.kind == EncodingIssueKind::InvalidUtf8)
        .map(|i| (i.pos, i.len))
        .collect();
    assert_eq!(invalid, vec![(7, 1), (15, 1)]);
}

#[test]
fn truncated_sequence_at_end_detected() {
    let src = Source::from_bytes(b"select \xE2\x82");
    assert_eq!(
        src.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::InvalidUtf8,
            pos: 7,
            len: 2,
        }]
    );
}

#[test]
fn issues_are_sorted_by_position() {
    let src = Source::from_bytes(b"\xFF\0\xEF\xBF\xBD\0");
    let positions: Vec<usize> = src.encoding_issues().iter().map(|i| i.pos).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
