//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a borrowed [`Cursor`] and produces [`RawToken`]
//! values with zero heap allocation. It does not resolve keywords or know
//! anything about statements; those are the splitter's job.
//!
//! # Design
//!
//! Each call to [`RawScanner::next_token`] starts in [`LexMode::Normal`].
//! The mode transition table decides whether the current byte opens a
//! quoted region or a comment; if it does, a focused method consumes the
//! whole region and returns to `Normal`. A region that never closes runs
//! to EOF and leaves the scanner in that region's mode.
//!
//! Malformed input never produces an error: every byte is covered by
//! exactly one token.

use crate::cursor::Cursor;
use crate::mode::{LexMode, ScanOptions};
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner.
///
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    options: ScanOptions,
    /// Mode at the cursor. `Normal` between tokens; an unterminated
    /// region's mode once it has run to EOF.
    mode: LexMode,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>, options: ScanOptions) -> Self {
        Self {
            cursor,
            options,
            mode: LexMode::Normal,
        }
    }

    /// The lexical mode at the current position.
    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Byte offset of the next token.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }

        if let Some((mode, opener)) = LexMode::opened_at(&self.cursor, &self.options) {
            self.cursor.advance_n(opener);
            return match mode {
                LexMode::InLineComment => self.line_comment(start),
                LexMode::InBlockComment => self.block_comment(start),
                _ => self.quoted(start, mode),
            };
        }

        match self.cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => self.whitespace(start),
            b';' => self.single(start, RawTag::Semicolon),
            b'.' => self.single(start, RawTag::Dot),
            b'@' => self.single(start, RawTag::At),
            b if is_ident_continue(b) => self.word(start),
            _ => self.single(start, RawTag::Punct),
        }
    }

    // ─── Normal Mode ───────────────────────────────────────────────

    fn whitespace(&mut self, start: usize) -> RawToken {
        self.cursor.eat_while(is_whitespace);
        self.token(start, RawTag::Whitespace)
    }

    fn word(&mut self, start: usize) -> RawToken {
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::Word)
    }

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: usize, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    // ─── Quoted Regions ────────────────────────────────────────────

    /// Consume a quoted region; the opening quote is already consumed.
    ///
    /// A doubled quote and (where the mode honours it) a backslash-escaped
    /// quote are literal content.
    fn quoted(&mut self, start: usize, mode: LexMode) -> RawToken {
        let Some(quote) = mode.quote_byte() else {
            return self.token(start, RawTag::Punct);
        };
        let escapes = mode.honours_backslash(&self.options);
        loop {
            let b = self.cursor.skip_to_quote_delim(quote, escapes);
            if self.cursor.is_eof() {
                self.mode = mode;
                return self.token(start, RawTag::quoted(mode, false));
            }
            self.cursor.advance();
            if b == b'\\' {
                // Skip the escaped byte, whatever it is.
                self.cursor.advance();
            } else if self.cursor.current() == quote {
                // Doubled quote.
                self.cursor.advance();
            } else {
                return self.token(start, RawTag::quoted(mode, true));
            }
        }
    }

    // ─── Comments ──────────────────────────────────────────────────

    /// The opener (`--` or `#`) is already consumed. The terminating
    /// newline is left for the next whitespace token.
    fn line_comment(&mut self, start: usize) -> RawToken {
        self.cursor.eat_until_newline_or_eof();
        self.token(start, RawTag::LineComment)
    }

    /// The opener `/*` is already consumed.
    fn block_comment(&mut self, start: usize) -> RawToken {
        if self.cursor.eat_past_block_comment_end() {
            self.token(start, RawTag::BlockComment)
        } else {
            self.mode = LexMode::InBlockComment;
            self.token(start, RawTag::UnterminatedBlockComment)
        }
    }

    #[inline]
    fn token(&self, start: usize, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, `_`, `$`, and every byte >= 0x80, so
/// multi-byte identifier characters (and bytes of invalid sequences)
/// stay inside a single word.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$' | 0x80..=0xFF
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Convenience function: tokenize a source string with default options.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming access, construct a `Source` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let src = crate::Source::new(source);
    RawScanner::new(src.cursor(), ScanOptions::default()).collect()
}
