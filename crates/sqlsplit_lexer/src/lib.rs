//! Low-level lexical scanner for SQL scripts.
//!
//! Splits a borrowed byte buffer into raw tokens that tile the input
//! exactly: quoted strings, backtick identifiers, comments, words,
//! whitespace, and single-byte punctuation. Each token belongs to one
//! [`LexMode`], so a consumer can tell whether a `;` is a real delimiter
//! without knowing anything about SQL grammar.
//!
//! The crate has no notion of statements. It is the lexical layer under
//! `sqlsplit`, and can be used on its own by highlighters or formatters.
//!
//! ```text
//! let src = Source::new("SELECT 'a;b';");
//! let mut scanner = RawScanner::new(src.cursor(), ScanOptions::default());
//! // Word, Whitespace, SingleQuoted, Semicolon, then Eof
//! ```

mod cursor;
mod mode;
mod raw_scanner;
mod source;
mod tag;

pub use cursor::Cursor;
pub use mode::{LexMode, ScanOptions};
pub use raw_scanner::{is_ident_continue, tokenize, RawScanner};
pub use source::{EncodingIssue, EncodingIssueKind, Source};
pub use tag::{RawTag, RawToken};
