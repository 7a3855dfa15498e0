//! Script splitting.
//!
//! One pass over the raw token stream. Words and punctuation feed the
//! [`BlockTracker`]; a `Semicolon` token (the scanner only produces one in
//! `Normal` mode) ends a statement when no block is open. Whatever follows
//! the last boundary becomes a final, unterminated statement.
//!
//! The output tiles the input: under [`BlankStatements::Preserve`],
//! concatenating every slice reproduces the input byte for byte.

use sqlsplit_lexer::{LexMode, RawScanner, RawTag, Source};

use crate::nesting::{BlockTracker, Significant};
use crate::{BlankStatements, RawStatement, Span, SplitOptions, StatementSlice};

/// Byte-level splitter yielding [`RawStatement`]s.
///
/// Works on arbitrary bytes, including invalid UTF-8.
pub struct RawSplitter<'a> {
    bytes: &'a [u8],
    scanner: RawScanner<'a>,
    tracker: BlockTracker,
    options: SplitOptions,
    /// Start of the statement being accumulated.
    start: usize,
    /// No significant token seen since `start`.
    blank: bool,
}

impl<'a> RawSplitter<'a> {
    pub fn new(source: &Source<'a>, options: SplitOptions) -> Self {
        for issue in source.encoding_issues() {
            tracing::debug!(kind = ?issue.kind, pos = issue.pos, len = issue.len, "encoding issue");
        }
        RawSplitter {
            bytes: source.as_bytes(),
            scanner: RawScanner::new(source.cursor(), options.scan),
            tracker: BlockTracker::new(),
            options,
            start: 0,
            blank: true,
        }
    }

    /// Scan to the next statement boundary, blank or not.
    fn next_statement(&mut self) -> Option<RawStatement> {
        loop {
            let pos = self.scanner.pos();
            let token = self.scanner.next_token();
            let end = pos + token.len;
            match token.tag {
                RawTag::Eof => return self.finish(),
                RawTag::Semicolon => {
                    if self.tracker.delimiter() {
                        return Some(self.emit(end, true));
                    }
                    self.blank = false;
                }
                RawTag::Word => {
                    self.blank = false;
                    self.tracker
                        .observe(Significant::Word(&self.bytes[pos..end]));
                }
                RawTag::Dot | RawTag::At | RawTag::Punct => {
                    self.blank = false;
                    self.tracker.observe(Significant::Punct(self.bytes[pos]));
                }
                tag if tag.is_trivia() => {}
                _ => {
                    self.blank = false;
                    self.tracker.observe(Significant::Quoted);
                }
            }
        }
    }

    fn finish(&mut self) -> Option<RawStatement> {
        if self.start >= self.bytes.len() {
            return None;
        }
        self.tracker.finish();
        let mode = self.scanner.mode();
        if mode != LexMode::Normal {
            tracing::debug!(?mode, start = self.start, "input ends inside an unterminated region");
        }
        if self.tracker.depth() > 0 {
            tracing::debug!(depth = self.tracker.depth(), "input ends inside an open block");
        }
        Some(self.emit(self.bytes.len(), false))
    }

    fn emit(&mut self, end: usize, terminated: bool) -> RawStatement {
        let statement = RawStatement {
            span: Span::new(self.start, end),
            terminated,
            blank: self.blank,
        };
        tracing::trace!(
            start = statement.span.start,
            end,
            terminated,
            blank = statement.blank,
            "statement boundary"
        );
        self.start = end;
        self.blank = true;
        statement
    }
}

impl Iterator for RawSplitter<'_> {
    type Item = RawStatement;

    fn next(&mut self) -> Option<RawStatement> {
        loop {
            let statement = self.next_statement()?;
            if statement.blank && self.options.blank_statements == BlankStatements::Skip {
                continue;
            }
            return Some(statement);
        }
    }
}

/// Lazy splitter over a `&str` script.
///
/// ```text
/// let slices: Vec<_> = Splitter::new("SELECT 1; SELECT 2", SplitOptions::default()).collect();
/// // ["SELECT 1;", " SELECT 2"]
/// ```
pub struct Splitter<'a> {
    input: &'a str,
    raw: RawSplitter<'a>,
}

impl<'a> Splitter<'a> {
    pub fn new(input: &'a str, options: SplitOptions) -> Self {
        Splitter {
            input,
            raw: RawSplitter::new(&Source::new(input), options),
        }
    }
}

impl<'a> Iterator for Splitter<'a> {
    type Item = StatementSlice<'a>;

    fn next(&mut self) -> Option<StatementSlice<'a>> {
        let raw = self.raw.next()?;
        Some(StatementSlice::new(self.input, raw))
    }
}

/// Split a script with default options.
pub fn split(input: &str) -> Vec<StatementSlice<'_>> {
    split_with(input, SplitOptions::default())
}

/// Split a script.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn split_with(input: &str, options: SplitOptions) -> Vec<StatementSlice<'_>> {
    let slices: Vec<_> = Splitter::new(input, options).collect();
    tracing::debug!(statements = slices.len(), "split complete");
    slices
}

/// Split raw bytes into statement spans.
///
/// Accepts input that is not valid UTF-8; invalid sequences are ordinary
/// identifier bytes to the scanner.
#[tracing::instrument(level = "debug", skip_all, fields(len = bytes.len()))]
pub fn split_spans(bytes: &[u8], options: SplitOptions) -> Vec<RawStatement> {
    RawSplitter::new(&Source::from_bytes(bytes), options).collect()
}
