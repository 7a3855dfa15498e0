//! Multi-statement SQL script splitting.
//!
//! A script is split into statement slices on top-level `;` delimiters.
//! Delimiters inside quoted strings, backtick identifiers, comments and
//! compound `BEGIN ... END` blocks are ignored. Slices borrow the input and
//! tile it exactly: whitespace and comments stay with the statement they
//! precede, and each terminated slice keeps its `;`.
//!
//! Splitting never fails. Malformed input (an unterminated quote, invalid
//! UTF-8) folds into the final slice.
//!
//! Slices can then be classified by a [`GrammarEngine`]: statements it
//! parses carry its AST, statements of kinds it does not know are kept as
//! opaque text, and a syntax error in a known kind aborts the script.
//!
//! ```text
//! let statements = parse_script(&KeywordGrammar::default(), "OPTIMIZE TABLE t; SELECT 1",
//!     &ParseContext::default(), SplitOptions::default())?;
//! // [Unparsed "OPTIMIZE TABLE t;", Parsed(SELECT) " SELECT 1"]
//! ```

mod dispatch;
mod error;
pub mod grammar;
mod keywords;
mod nesting;
mod options;
mod span;
mod splitter;
mod statement;

pub use dispatch::{
    classify, parse_script, Classification, ClassifiedStatement, GrammarEngine, GrammarOutcome,
    ParseContext,
};
pub use error::DispatchError;
pub use grammar::{KeywordGrammar, KeywordStatement};
pub use nesting::{BlockTracker, Significant};
pub use options::{BlankStatements, SplitOptions};
pub use span::Span;
pub use splitter::{split, split_spans, split_with, RawSplitter, Splitter};
pub use statement::{RawStatement, StatementSlice};

pub use sqlsplit_lexer::ScanOptions;
