//! Compound-statement nesting.
//!
//! [`BlockTracker`] counts open `BEGIN ... END` and `CASE ... END` blocks so
//! the splitter can tell a statement-internal `;` from a script boundary.
//! It sees only significant tokens from `Normal` mode; quoted regions and
//! comments reach it as opaque [`Significant::Quoted`] or not at all.
//!
//! This is a keyword counter, not a grammar. A handful of position rules
//! keep ordinary SQL from being mistaken for block structure:
//!
//! - a word right after `.` or `@` is a name (`t.end`, `@begin`)
//! - `BEGIN`/`END` right after `(` or `,` is a column in a list
//! - `BEGIN` followed by `;`, end of input or `WORK`, or preceded by `XA`,
//!   is a transaction statement
//! - `END IF`/`END LOOP`/`END WHILE`/`END REPEAT` close constructs that
//!   never opened a block
//!
//! `BEGIN` and `END` need one token of lookahead, so they are held pending
//! until the next significant token or the delimiter arrives.

use crate::keywords::{self, BlockKeyword};

/// A significant (non-trivia) token, as seen by the tracker.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Significant<'a> {
    /// An identifier-like word from `Normal` mode.
    Word(&'a [u8]),
    /// A single punctuation byte other than the delimiter.
    Punct(u8),
    /// A quoted string or backtick identifier, terminated or not.
    Quoted,
}

/// A block keyword waiting for its next token.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Pending {
    Begin,
    End,
}

/// What the previous significant token says about the next word.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
enum Position {
    #[default]
    Free,
    /// After `.` or `@`: the next word is a name.
    Qualified,
    /// After `(` or `,`: the next `BEGIN`/`END` is a column name.
    ListItem,
    /// After `XA`: the next `BEGIN` starts a transaction.
    AfterXa,
}

/// Tracks compound-block depth across one script.
#[derive(Clone, Debug, Default)]
pub struct BlockTracker {
    depth: u32,
    pending: Option<Pending>,
    position: Position,
}

impl BlockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth. Pending decisions are not reflected until
    /// they resolve.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Feed one significant token.
    pub fn observe(&mut self, token: Significant<'_>) {
        let position = std::mem::take(&mut self.position);
        match token {
            Significant::Word(word) => self.word(word, position),
            Significant::Punct(byte) => {
                self.resolve_pending();
                self.position = match byte {
                    b'.' | b'@' => Position::Qualified,
                    b'(' | b',' => Position::ListItem,
                    _ => Position::Free,
                };
            }
            Significant::Quoted => self.resolve_pending(),
        }
    }

    /// Feed a delimiter and report whether it ends a statement.
    ///
    /// A pending `BEGIN` followed by `;` is `BEGIN;` (a transaction); a
    /// pending `END` closes its block before the boundary test.
    pub fn delimiter(&mut self) -> bool {
        if self.pending.take() == Some(Pending::End) {
            self.close();
        }
        self.position = Position::Free;
        self.depth == 0
    }

    /// Resolve any pending decision at end of input.
    pub fn finish(&mut self) {
        if self.pending.take() == Some(Pending::End) {
            self.close();
        }
    }

    fn word(&mut self, word: &[u8], position: Position) {
        let keyword = match position {
            Position::Qualified => None,
            _ => keywords::lookup(word),
        };

        match (self.pending.take(), keyword) {
            (Some(Pending::Begin), Some(BlockKeyword::Work)) => return,
            (Some(Pending::Begin), _) => self.open(),
            (Some(Pending::End), Some(kw)) if kw.is_end_suffix() => return,
            (Some(Pending::End), Some(BlockKeyword::Case)) => {
                self.close();
                return;
            }
            (Some(Pending::End), _) => self.close(),
            (None, _) => {}
        }

        match keyword {
            Some(BlockKeyword::Begin)
                if !matches!(position, Position::AfterXa | Position::ListItem) =>
            {
                self.pending = Some(Pending::Begin);
            }
            Some(BlockKeyword::End) if position != Position::ListItem => {
                self.pending = Some(Pending::End);
            }
            Some(BlockKeyword::Case) => self.open(),
            Some(BlockKeyword::Xa) => self.position = Position::AfterXa,
            _ => {}
        }
    }

    fn resolve_pending(&mut self) {
        match self.pending.take() {
            Some(Pending::Begin) => self.open(),
            Some(Pending::End) => self.close(),
            None => {}
        }
    }

    fn open(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
