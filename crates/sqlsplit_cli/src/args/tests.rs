use super::*;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<Command, CliError> {
    parse_args(args.iter().map(|a| (*a).to_owned()))
}

fn split_args(args: &[&str]) -> CliArgs {
    match parse(args) {
        Ok(Command::Split(parsed)) => parsed,
        other => panic!("expected split arguments, got {other:?}"),
    }
}

#[test]
fn no_arguments_reads_stdin() {
    assert_eq!(split_args(&[]), CliArgs::default());
}

#[test]
fn dash_reads_stdin() {
    assert_eq!(split_args(&["-"]).input, None);
}

#[test]
fn file_argument() {
    assert_eq!(
        split_args(&["script.sql"]).input,
        Some(PathBuf::from("script.sql"))
    );
}

#[test]
fn flags_in_any_order() {
    let parsed = split_args(&[
        "--json",
        "script.sql",
        "--classify",
        "--skip-blank",
        "--no-backslash-escapes",
        "--no-hash-comments",
        "--charset=utf8mb4",
        "--collation=utf8mb4_bin",
    ]);
    assert!(parsed.json);
    assert!(parsed.classify);
    assert_eq!(
        parsed.options.blank_statements,
        sqlsplit::BlankStatements::Skip
    );
    assert!(!parsed.options.scan.backslash_escapes);
    assert!(!parsed.options.scan.hash_comments);
    assert_eq!(parsed.charset.as_deref(), Some("utf8mb4"));
    assert_eq!(parsed.collation.as_deref(), Some("utf8mb4_bin"));
    assert_eq!(parsed.input, Some(PathBuf::from("script.sql")));
}

#[test]
fn help_wins() {
    assert_eq!(parse(&["--json", "-h"]).ok(), Some(Command::Help));
    assert_eq!(parse(&["--help"]).ok(), Some(Command::Help));
}

#[test]
fn unknown_option_is_a_usage_error() {
    assert!(matches!(parse(&["--frobnicate"]), Err(CliError::Usage(_))));
}

#[test]
fn second_file_is_a_usage_error() {
    assert!(matches!(parse(&["a.sql", "b.sql"]), Err(CliError::Usage(_))));
}

#[test]
fn empty_charset_is_a_usage_error() {
    assert!(matches!(parse(&["--charset="]), Err(CliError::Usage(_))));
}
