//! Byte cursor over a borrowed SQL source.
//!
//! The cursor advances through the input byte-by-byte. Reads past the end
//! return `0x00`, so lookahead near EOF needs no explicit bounds checks at
//! the call site.
//!
//! # Interior Null Bytes
//!
//! A null byte inside the input also reads as `0x00`. The cursor
//! distinguishes the two by comparing `pos` against the source length:
//! use [`is_eof()`](Cursor::is_eof) rather than testing for zero.

/// Byte cursor over a borrowed source.
///
/// Created via [`Source::cursor()`](crate::Source::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.buf.get(index).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.buf.len()
    }

    /// Extract the source bytes in `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start..end]
    }

    /// Extract the source bytes from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of what `pred(0)` returns.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte, or to EOF if there is none.
    ///
    /// The newline itself is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos..];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.buf.len(),
        }
    }

    /// Advance past quoted content to the next byte that can end or
    /// escape the quoted region. Returns the byte found, or 0 for EOF.
    ///
    /// With `escapes` set the search stops at `quote` or `\`; otherwise
    /// only at `quote`.
    pub fn skip_to_quote_delim(&mut self, quote: u8, escapes: bool) -> u8 {
        let remaining = &self.buf[self.pos..];
        let offset = if escapes {
            memchr::memchr2(quote, b'\\', remaining)
        } else {
            memchr::memchr(quote, remaining)
        };

        if let Some(off) = offset {
            self.pos += off;
            self.buf[self.pos]
        } else {
            self.pos = self.buf.len();
            0
        }
    }

    /// Advance past the next `*/`, returning `true` if one was found.
    ///
    /// If the block comment never closes the cursor is left at EOF.
    pub fn eat_past_block_comment_end(&mut self) -> bool {
        let remaining = &self.buf[self.pos..];
        if let Some(off) = memchr::memmem::find(remaining, b"*/") {
            self.pos += off + 2;
            true
        } else {
            self.pos = self.buf.len();
            false
        }
    }
}
