//! Statement slices produced by the splitter.

use crate::Span;

/// Byte-level statement boundary, independent of text encoding.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawStatement {
    /// Location in the input, including the trailing `;` when terminated.
    pub span: Span,
    /// Whether the slice ends with a top-level `;`.
    pub terminated: bool,
    /// Whether the slice holds only whitespace, comments and its `;`.
    pub blank: bool,
}

/// One statement of a script, borrowed from the input.
///
/// `text` is exactly `&input[span]`: leading whitespace, comments and the
/// trailing `;` are all kept.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StatementSlice<'a> {
    pub span: Span,
    pub text: &'a str,
    pub terminated: bool,
    pub blank: bool,
}

impl<'a> StatementSlice<'a> {
    pub(crate) fn new(input: &'a str, raw: RawStatement) -> Self {
        StatementSlice {
            span: raw.span,
            text: &input[raw.span.to_range()],
            terminated: raw.terminated,
            blank: raw.blank,
        }
    }

    /// The statement text without its trailing `;`.
    pub fn body(&self) -> &'a str {
        if self.terminated {
            &self.text[..self.text.len() - 1]
        } else {
            self.text
        }
    }
}
