//! Dispatch errors.

use crate::Span;

/// A hard failure while classifying a script.
///
/// Splitting itself never fails; only a grammar engine rejecting a
/// statement of a kind it supports produces an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// The engine reported a syntax error in a supported statement.
    #[error(
        "syntax error in statement {} of {total} at bytes {span}: {message}\n  statement: {text:?}",
        .index + 1
    )]
    Syntax {
        /// Zero-based index of the statement among all split statements.
        index: usize,
        /// Number of statements the splitter produced.
        total: usize,
        span: Span,
        text: String,
        message: String,
    },
}
