//! Lexical modes and the `Normal`-mode transition table.
//!
//! Exactly one mode is active at any scan position. Only `Normal` can
//! open another mode, and every other mode can only return to `Normal`,
//! so the machine is a closed set of states with a single entry table
//! ([`LexMode::opened_at`]) and one exit rule per mode (implemented by
//! the scanner's region methods).

use crate::Cursor;

/// Lexical context of the scanner at a given position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LexMode {
    /// Outside any quoted region or comment.
    #[default]
    Normal,
    /// Inside `'...'`.
    InSingleQuoteString,
    /// Inside `"..."`.
    InDoubleQuoteString,
    /// Inside `` `...` ``.
    InBacktickIdentifier,
    /// Inside `-- ...` or `# ...`, up to (not including) the newline.
    InLineComment,
    /// Inside `/* ... */`.
    InBlockComment,
}

/// Options that change which byte sequences open a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Treat `#` as a line comment opener (MySQL).
    pub hash_comments: bool,
    /// Honour `\` escapes inside `'` and `"` strings. Disable to model
    /// the `NO_BACKSLASH_ESCAPES` SQL mode.
    pub backslash_escapes: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            hash_comments: true,
            backslash_escapes: true,
        }
    }
}

impl LexMode {
    /// Returns `true` if a `;` seen in this mode separates statements.
    #[inline]
    pub fn is_delimiter_significant(self) -> bool {
        self == LexMode::Normal
    }

    /// Returns `true` for the three quoting modes.
    pub fn is_quoted(self) -> bool {
        self.quote_byte().is_some()
    }

    /// Returns `true` for the two comment modes.
    pub fn is_comment(self) -> bool {
        matches!(self, LexMode::InLineComment | LexMode::InBlockComment)
    }

    /// The byte that opens and closes a quoting mode.
    pub fn quote_byte(self) -> Option<u8> {
        match self {
            LexMode::InSingleQuoteString => Some(b'\''),
            LexMode::InDoubleQuoteString => Some(b'"'),
            LexMode::InBacktickIdentifier => Some(b'`'),
            _ => None,
        }
    }

    /// Returns `true` if `\` escapes the next byte in this mode.
    ///
    /// Backtick identifiers only honour doubling, as in MySQL.
    pub fn honours_backslash(self, options: &ScanOptions) -> bool {
        options.backslash_escapes
            && matches!(
                self,
                LexMode::InSingleQuoteString | LexMode::InDoubleQuoteString
            )
    }

    /// Transition out of `Normal` mode at the cursor position.
    ///
    /// Returns the mode entered and the width of its opener in bytes, or
    /// `None` if the current byte stays in `Normal` mode.
    pub fn opened_at(cursor: &Cursor<'_>, options: &ScanOptions) -> Option<(LexMode, usize)> {
        if cursor.is_eof() {
            return None;
        }
        match cursor.current() {
            b'\'' => Some((LexMode::InSingleQuoteString, 1)),
            b'"' => Some((LexMode::InDoubleQuoteString, 1)),
            b'`' => Some((LexMode::InBacktickIdentifier, 1)),
            b'#' if options.hash_comments => Some((LexMode::InLineComment, 1)),
            // `--` only opens a comment when followed by whitespace, a
            // control character, or end of input: `a--1` is arithmetic.
            b'-' if cursor.peek() == b'-' && cursor.peek2() <= b' ' => {
                Some((LexMode::InLineComment, 2))
            }
            b'/' if cursor.peek() == b'*' => Some((LexMode::InBlockComment, 2)),
            _ => None,
        }
    }
}
