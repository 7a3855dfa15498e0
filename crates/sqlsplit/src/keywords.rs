//! Block keyword recognition.
//!
//! Only the handful of words that affect compound-statement nesting are
//! recognized. Matching is ASCII case-insensitive and length-bucketed:
//! words outside the 2-6 byte range are rejected without comparison.

/// A word that can open, close, or qualify a compound block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BlockKeyword {
    Begin,
    End,
    Case,
    If,
    Loop,
    While,
    Repeat,
    Work,
    Xa,
}

impl BlockKeyword {
    /// True for words that follow `END` to close a construct that never
    /// opened a block (`END IF`, `END LOOP`, `END WHILE`, `END REPEAT`).
    #[inline]
    pub fn is_end_suffix(self) -> bool {
        matches!(self, Self::If | Self::Loop | Self::While | Self::Repeat)
    }
}

/// Look up a block keyword by the bytes of a word token.
#[inline]
pub fn lookup(word: &[u8]) -> Option<BlockKeyword> {
    let len = word.len();
    if !(2..=6).contains(&len) || !word[0].is_ascii_alphabetic() {
        return None;
    }

    let is = |kw: &[u8]| word.eq_ignore_ascii_case(kw);
    match len {
        2 if is(b"IF") => Some(BlockKeyword::If),
        2 if is(b"XA") => Some(BlockKeyword::Xa),
        3 if is(b"END") => Some(BlockKeyword::End),
        4 if is(b"CASE") => Some(BlockKeyword::Case),
        4 if is(b"LOOP") => Some(BlockKeyword::Loop),
        4 if is(b"WORK") => Some(BlockKeyword::Work),
        5 if is(b"BEGIN") => Some(BlockKeyword::Begin),
        5 if is(b"WHILE") => Some(BlockKeyword::While),
        6 if is(b"REPEAT") => Some(BlockKeyword::Repeat),
        _ => None,
    }
}
