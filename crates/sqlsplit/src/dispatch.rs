//! Grammar dispatch.
//!
//! Each split statement is offered to a [`GrammarEngine`]. The engine's
//! answer is three-way: a statement it understands becomes
//! [`Classification::Parsed`], a statement of a kind it does not handle is
//! kept verbatim as [`Classification::Unparsed`], and a syntax error in a
//! kind it does handle aborts the whole script.

use crate::{split_with, DispatchError, SplitOptions, StatementSlice};

/// Session context forwarded to the engine with every statement.
///
/// Never affects splitting.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct ParseContext<'c> {
    pub charset: Option<&'c str>,
    pub collation: Option<&'c str>,
}

/// An engine's verdict on one statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrammarOutcome<A> {
    Parsed(A),
    /// The statement kind is outside the engine's grammar.
    Unsupported,
    /// The statement kind is supported but the text is malformed.
    SyntaxError(String),
}

/// A SQL grammar for single statements.
///
/// `text` is the exact statement slice, trailing `;` included when the
/// statement was terminated.
pub trait GrammarEngine {
    type Ast;

    fn parse(&self, text: &str, context: &ParseContext<'_>) -> GrammarOutcome<Self::Ast>;
}

/// Result of dispatching one statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification<A> {
    Parsed(A),
    Unparsed,
}

/// A statement slice together with its classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedStatement<'a, A> {
    pub slice: StatementSlice<'a>,
    pub classification: Classification<A>,
}

impl<'a, A> ClassifiedStatement<'a, A> {
    #[inline]
    pub fn text(&self) -> &'a str {
        self.slice.text
    }

    #[inline]
    pub fn is_parsed(&self) -> bool {
        matches!(self.classification, Classification::Parsed(_))
    }

    /// The parsed structure, if the engine produced one.
    pub fn ast(&self) -> Option<&A> {
        match &self.classification {
            Classification::Parsed(ast) => Some(ast),
            Classification::Unparsed => None,
        }
    }
}

/// Split a script and classify every statement.
///
/// Returns all statements in input order, or the first syntax error.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn parse_script<'a, G>(
    engine: &G,
    input: &'a str,
    context: &ParseContext<'_>,
    options: SplitOptions,
) -> Result<Vec<ClassifiedStatement<'a, G::Ast>>, DispatchError>
where
    G: GrammarEngine + ?Sized,
{
    classify(engine, split_with(input, options), context)
}

/// Classify statements that were already split.
pub fn classify<'a, G>(
    engine: &G,
    slices: Vec<StatementSlice<'a>>,
    context: &ParseContext<'_>,
) -> Result<Vec<ClassifiedStatement<'a, G::Ast>>, DispatchError>
where
    G: GrammarEngine + ?Sized,
{
    let total = slices.len();
    let mut classified = Vec::with_capacity(total);

    for (index, slice) in slices.into_iter().enumerate() {
        let classification = match engine.parse(slice.text, context) {
            GrammarOutcome::Parsed(ast) => Classification::Parsed(ast),
            GrammarOutcome::Unsupported => {
                tracing::debug!(index, span = %slice.span, "unsupported statement kept unparsed");
                Classification::Unparsed
            }
            GrammarOutcome::SyntaxError(message) => {
                tracing::debug!(index, span = %slice.span, %message, "syntax error");
                return Err(DispatchError::Syntax {
                    index,
                    total,
                    span: slice.span,
                    text: slice.text.to_owned(),
                    message,
                });
            }
        };
        classified.push(ClassifiedStatement {
            slice,
            classification,
        });
    }

    Ok(classified)
}

#[cfg(test)]
mod tests;
