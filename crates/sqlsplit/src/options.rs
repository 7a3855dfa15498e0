//! Splitter configuration.

use sqlsplit_lexer::ScanOptions;

/// What to do with statements that contain no SQL.
///
/// A blank statement holds only whitespace and comments, optionally
/// followed by its `;` (the `";"` produced by `;;`, or a trailing newline
/// after the last delimiter).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum BlankStatements {
    /// Emit every slice. Concatenating the output reproduces the input.
    #[default]
    Preserve,
    /// Drop blank slices.
    Skip,
}

/// Options for one split.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SplitOptions {
    pub blank_statements: BlankStatements,
    pub scan: ScanOptions,
}

impl SplitOptions {
    /// Options with blank statements dropped.
    #[must_use]
    pub fn skip_blank(mut self) -> Self {
        self.blank_statements = BlankStatements::Skip;
        self
    }

    /// Options with the given lexical settings.
    #[must_use]
    pub fn with_scan(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }
}
