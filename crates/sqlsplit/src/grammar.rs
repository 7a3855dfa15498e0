//! Leading-keyword grammar.
//!
//! [`KeywordGrammar`] is a minimal [`GrammarEngine`]: it classifies a
//! statement by its first word and checks only that the statement does not
//! end inside a quote or block comment. It stands in for a full SQL parser
//! in the CLI and in tests.

use sqlsplit_lexer::{LexMode, RawScanner, RawTag, ScanOptions, Source};

use crate::{GrammarEngine, GrammarOutcome, ParseContext, Span};

/// Statement kinds accepted by [`KeywordGrammar::default`].
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "REPLACE", "WITH", "CREATE", "ALTER", "DROP",
    "TRUNCATE", "RENAME", "SET", "SHOW", "USE", "EXPLAIN", "DESCRIBE", "DESC", "BEGIN", "START",
    "COMMIT", "ROLLBACK", "GRANT", "REVOKE", "CALL",
];

/// The statement kind recognized by [`KeywordGrammar`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordStatement {
    /// Leading keyword, upper-cased.
    pub keyword: String,
    /// Location of the keyword within the statement text.
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct KeywordGrammar {
    /// Upper-cased, sorted.
    supported: Vec<String>,
    scan: ScanOptions,
}

impl KeywordGrammar {
    /// Grammar accepting statements that start with any of `keywords`
    /// (case-insensitive).
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut supported: Vec<String> = keywords
            .into_iter()
            .map(|kw| kw.as_ref().to_ascii_uppercase())
            .collect();
        supported.sort_unstable();
        supported.dedup();
        KeywordGrammar {
            supported,
            scan: ScanOptions::default(),
        }
    }

    /// Use the same lexical settings as the splitter.
    #[must_use]
    pub fn with_scan_options(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    pub fn supports(&self, keyword: &str) -> bool {
        self.supported
            .binary_search_by(|kw| cmp_ignore_ascii_case(kw, keyword))
            .is_ok()
    }
}

impl Default for KeywordGrammar {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

impl GrammarEngine for KeywordGrammar {
    type Ast = KeywordStatement;

    fn parse(&self, text: &str, _context: &ParseContext<'_>) -> GrammarOutcome<KeywordStatement> {
        let source = Source::new(text);
        let mut scanner = RawScanner::new(source.cursor(), self.scan);

        let mut pos = 0;
        let leading = loop {
            let token = scanner.next_token();
            let span = Span::new(pos, pos + token.len);
            pos = span.end;
            match token.tag {
                tag if tag.is_trivia() => {}
                RawTag::Word => break Some(span),
                _ => break None,
            }
        };
        let Some(span) = leading else {
            return GrammarOutcome::Unsupported;
        };
        let keyword = &text[span.to_range()];
        if !self.supports(keyword) {
            return GrammarOutcome::Unsupported;
        }

        while scanner.next_token().tag != RawTag::Eof {}
        if let Some(what) = unterminated(scanner.mode()) {
            return GrammarOutcome::SyntaxError(format!("statement ends inside {what}"));
        }

        GrammarOutcome::Parsed(KeywordStatement {
            keyword: keyword.to_ascii_uppercase(),
            span,
        })
    }
}

fn unterminated(mode: LexMode) -> Option<&'static str> {
    match mode {
        LexMode::InSingleQuoteString => Some("an unterminated '...' string"),
        LexMode::InDoubleQuoteString => Some("an unterminated \"...\" string"),
        LexMode::InBacktickIdentifier => Some("an unterminated `...` identifier"),
        LexMode::InBlockComment => Some("an unterminated /* comment"),
        LexMode::Normal | LexMode::InLineComment => None,
    }
}

fn cmp_ignore_ascii_case(upper: &str, other: &str) -> std::cmp::Ordering {
    upper
        .bytes()
        .cmp(other.bytes().map(|b| b.to_ascii_uppercase()))
}
