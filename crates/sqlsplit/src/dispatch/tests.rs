use std::cell::RefCell;

use super::*;
use crate::{split, Span};
use pretty_assertions::assert_eq;

/// Engine scripted by the first word of each statement: `ok` parses to the
/// trimmed text, `bad` is a syntax error, anything else is unsupported.
/// Records every context it was called with.
#[derive(Default)]
struct ScriptedEngine {
    seen: RefCell<Vec<(Option<String>, Option<String>)>>,
}

impl GrammarEngine for ScriptedEngine {
    type Ast = String;

    fn parse(&self, text: &str, context: &ParseContext<'_>) -> GrammarOutcome<String> {
        self.seen.borrow_mut().push((
            context.charset.map(str::to_owned),
            context.collation.map(str::to_owned),
        ));
        let body = text.trim().trim_end_matches(';');
        match body.split_whitespace().next() {
            Some("ok") => GrammarOutcome::Parsed(body.to_owned()),
            Some("bad") => GrammarOutcome::SyntaxError(format!("near {body:?}")),
            _ => GrammarOutcome::Unsupported,
        }
    }
}

fn run<'a>(
    engine: &ScriptedEngine,
    input: &'a str,
) -> Result<Vec<ClassifiedStatement<'a, String>>, DispatchError> {
    parse_script(engine, input, &ParseContext::default(), SplitOptions::default())
}

#[test]
fn parsed_and_unparsed_keep_order() {
    let engine = ScriptedEngine::default();
    let Ok(statements) = run(&engine, "other 1;ok 2; ok 3") else {
        panic!("script should classify");
    };
    let classes: Vec<Classification<String>> =
        statements.iter().map(|s| s.classification.clone()).collect();
    assert_eq!(
        classes,
        vec![
            Classification::Unparsed,
            Classification::Parsed("ok 2".to_owned()),
            Classification::Parsed("ok 3".to_owned()),
        ]
    );
    let texts: Vec<&str> = statements.iter().map(ClassifiedStatement::text).collect();
    assert_eq!(texts, vec!["other 1;", "ok 2;", " ok 3"]);
}

#[test]
fn unparsed_statement_keeps_exact_text() {
    let engine = ScriptedEngine::default();
    let Ok(statements) = run(&engine, "  OPTIMIZE TABLE foo ;") else {
        panic!("script should classify");
    };
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].text(), "  OPTIMIZE TABLE foo ;");
    assert!(!statements[0].is_parsed());
    assert_eq!(statements[0].ast(), None);
}

#[test]
fn syntax_error_aborts_with_location() {
    let engine = ScriptedEngine::default();
    let err = run(&engine, "ok 1; bad 2; ok 3;").err();
    assert_eq!(
        err,
        Some(DispatchError::Syntax {
            index: 1,
            total: 3,
            span: Span::new(5, 12),
            text: " bad 2;".to_owned(),
            message: "near \"bad 2\"".to_owned(),
        })
    );
    // Statements after the failure are never offered to the engine.
    assert_eq!(engine.seen.borrow().len(), 2);
}

#[test]
fn syntax_error_message_names_statement() {
    let engine = ScriptedEngine::default();
    let Err(err) = run(&engine, "bad x") else {
        panic!("expected a syntax error");
    };
    assert_eq!(
        err.to_string(),
        "syntax error in statement 1 of 1 at bytes 0..5: near \"bad x\"\n  statement: \"bad x\""
    );
}

#[test]
fn context_is_forwarded_to_every_statement() {
    let engine = ScriptedEngine::default();
    let context = ParseContext {
        charset: Some("utf8mb4"),
        collation: Some("utf8mb4_bin"),
    };
    let result = parse_script(&engine, "a;b;c", &context, SplitOptions::default());
    assert!(result.is_ok());
    let expected = (Some("utf8mb4".to_owned()), Some("utf8mb4_bin".to_owned()));
    assert_eq!(*engine.seen.borrow(), vec![expected; 3]);
}

#[test]
fn classify_presplit_slices() {
    let engine = ScriptedEngine::default();
    let slices = split("ok a;ok b");
    let Ok(statements) = classify(&engine, slices, &ParseContext::default()) else {
        panic!("slices should classify");
    };
    assert_eq!(statements[1].ast().map(String::as_str), Some("ok b"));
    assert_eq!(statements[1].slice.span, Span::new(5, 9));
}

#[test]
fn empty_script_classifies_to_nothing() {
    let engine = ScriptedEngine::default();
    assert_eq!(run(&engine, ""), Ok(Vec::new()));
}
