//! Borrowed SQL source with encoding diagnostics.
//!
//! The scanner never copies or mutates the caller's input: a [`Source`]
//! is a view over the borrowed bytes plus the encoding issues found while
//! constructing it.
//!
//! # Encoding Detection
//!
//! During construction the source is scanned for:
//! - byte order marks (UTF-8, UTF-16 LE/BE)
//! - interior null bytes
//! - U+FFFD replacement characters, left behind by a lossy decode upstream
//! - invalid UTF-8 sequences (byte input only)
//!
//! Issues are diagnostics. They never change how the input is scanned:
//! every byte still belongs to exactly one token.

use crate::Cursor;

/// UTF-8 encoding of U+FFFD REPLACEMENT CHARACTER.
const REPLACEMENT_CHAR: &[u8] = "\u{FFFD}".as_bytes();

/// Borrowed source buffer.
#[derive(Clone, Debug)]
pub struct Source<'a> {
    bytes: &'a [u8],
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected while constructing a [`Source`].
///
/// Carries the kind, byte position, and byte length of the offending
/// sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    pub pos: usize,
    pub len: usize,
}

/// Kind of encoding issue detected in a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start.
    Utf16BeBom,
    /// Null byte (U+0000) in source content.
    InteriorNull,
    /// U+FFFD in the source, the marker of an earlier lossy decode.
    ReplacementChar,
    /// Byte sequence that is not valid UTF-8.
    InvalidUtf8,
}

impl<'a> Source<'a> {
    /// Borrow a UTF-8 source.
    pub fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let mut encoding_issues = Vec::new();
        detect_bom(bytes, &mut encoding_issues);
        detect_interior_nulls(bytes, &mut encoding_issues);
        detect_replacement_chars(bytes, &mut encoding_issues);
        encoding_issues.sort_by_key(|issue| issue.pos);
        Self {
            bytes,
            encoding_issues,
        }
    }

    /// Borrow an arbitrary byte sequence.
    ///
    /// The bytes need not be valid UTF-8; invalid sequences are recorded
    /// as [`EncodingIssueKind::InvalidUtf8`] and scanned like any other
    /// non-ASCII byte.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        let mut encoding_issues = Vec::new();
        detect_bom(bytes, &mut encoding_issues);
        detect_interior_nulls(bytes, &mut encoding_issues);
        detect_replacement_chars(bytes, &mut encoding_issues);
        detect_invalid_utf8(bytes, &mut encoding_issues);
        encoding_issues.sort_by_key(|issue| issue.pos);
        Self {
            bytes,
            encoding_issues,
        }
    }

    /// Returns the borrowed source bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.bytes)
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encoding issues detected during construction, in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect byte order marks at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let (kind, len) = if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        (EncodingIssueKind::Utf8Bom, 3)
    } else if source.starts_with(&[0xFF, 0xFE]) {
        (EncodingIssueKind::Utf16LeBom, 2)
    } else if source.starts_with(&[0xFE, 0xFF]) {
        (EncodingIssueKind::Utf16BeBom, 2)
    } else {
        return;
    };
    issues.push(EncodingIssue { kind, pos: 0, len });
}

fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    issues.extend(memchr::memchr_iter(0, source).map(|pos| EncodingIssue {
        kind: EncodingIssueKind::InteriorNull,
        pos,
        len: 1,
    }));
}

fn detect_replacement_chars(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    issues.extend(
        memchr::memmem::find_iter(source, REPLACEMENT_CHAR).map(|pos| EncodingIssue {
            kind: EncodingIssueKind::ReplacementChar,
            pos,
            len: REPLACEMENT_CHAR.len(),
        }),
    );
}

/// Record every maximal invalid UTF-8 sequence.
fn detect_invalid_utf8(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while offset < source.len() {
        match std::str::from_utf8(&source[offset..]) {
            Ok(_) => break,
            Err(err) => {
                let pos = offset + err.valid_up_to();
                // `None` means the input ends inside a truncated sequence.
                let len = err.error_len().unwrap_or(source.len() - pos);
                issues.push(EncodingIssue {
                    kind: EncodingIssueKind::InvalidUtf8,
                    pos,
                    len,
                });
                offset = pos + len;
            }
        }
    }
}

#[cfg(test)]
mod tests;
