//! Raw token tags produced by the scanner.

use crate::LexMode;

/// Kind of a raw token.
///
/// Every tag belongs to exactly one [`LexMode`] (see [`RawTag::mode`]):
/// the mode the scanner was in while consuming the token's bytes.
/// `Unterminated*` tags mark a region that was still open at EOF.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Normal mode: significant ===
    /// Maximal run of identifier-continuing bytes (`[A-Za-z0-9_$]` and
    /// every byte >= 0x80).
    Word = 0,
    /// Statement delimiter `;`.
    Semicolon = 1,
    /// Qualifier `.`.
    Dot = 2,
    /// Variable sigil `@`.
    At = 3,
    /// Any other single byte: operators, parentheses, control bytes.
    Punct = 4,

    // === Quoted regions ===
    SingleQuoted = 16,
    DoubleQuoted = 17,
    BacktickQuoted = 18,

    // === Trivia ===
    /// Run of spaces, tabs, newlines, carriage returns, form feeds and
    /// vertical tabs.
    Whitespace = 32,
    /// `-- ...` or `# ...`, excluding the terminating newline.
    LineComment = 33,
    /// `/* ... */`.
    BlockComment = 34,

    // === Unterminated regions (ran to EOF) ===
    UnterminatedSingleQuoted = 240,
    UnterminatedDoubleQuoted = 241,
    UnterminatedBacktickQuoted = 242,
    UnterminatedBlockComment = 243,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// The lexical mode this token's bytes were scanned in.
    pub fn mode(self) -> LexMode {
        match self {
            RawTag::SingleQuoted | RawTag::UnterminatedSingleQuoted => {
                LexMode::InSingleQuoteString
            }
            RawTag::DoubleQuoted | RawTag::UnterminatedDoubleQuoted => {
                LexMode::InDoubleQuoteString
            }
            RawTag::BacktickQuoted | RawTag::UnterminatedBacktickQuoted => {
                LexMode::InBacktickIdentifier
            }
            RawTag::LineComment => LexMode::InLineComment,
            RawTag::BlockComment | RawTag::UnterminatedBlockComment => LexMode::InBlockComment,
            RawTag::Word
            | RawTag::Semicolon
            | RawTag::Dot
            | RawTag::At
            | RawTag::Punct
            | RawTag::Whitespace
            | RawTag::Eof => LexMode::Normal,
        }
    }

    /// Returns `true` for whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace
                | RawTag::LineComment
                | RawTag::BlockComment
                | RawTag::UnterminatedBlockComment
        )
    }

    /// Returns `true` if the token is a region still open at EOF.
    pub fn is_unterminated(self) -> bool {
        matches!(
            self,
            RawTag::UnterminatedSingleQuoted
                | RawTag::UnterminatedDoubleQuoted
                | RawTag::UnterminatedBacktickQuoted
                | RawTag::UnterminatedBlockComment
        )
    }

    /// Fixed source text for single-byte tags.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            RawTag::Semicolon => Some(";"),
            RawTag::Dot => Some("."),
            RawTag::At => Some("@"),
            _ => None,
        }
    }

    /// Quoted-region tag for `mode`, terminated or not.
    pub(crate) fn quoted(mode: LexMode, terminated: bool) -> RawTag {
        match (mode, terminated) {
            (LexMode::InDoubleQuoteString, true) => RawTag::DoubleQuoted,
            (LexMode::InDoubleQuoteString, false) => RawTag::UnterminatedDoubleQuoted,
            (LexMode::InBacktickIdentifier, true) => RawTag::BacktickQuoted,
            (LexMode::InBacktickIdentifier, false) => RawTag::UnterminatedBacktickQuoted,
            (_, true) => RawTag::SingleQuoted,
            (_, false) => RawTag::UnterminatedSingleQuoted,
        }
    }
}

/// A raw token: a tag and the number of source bytes it covers.
///
/// Positions are implicit: the scanner's tokens tile the input, so the
/// start of a token is the sum of the lengths before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: usize,
}
