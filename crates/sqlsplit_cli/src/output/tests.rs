use super::*;
use pretty_assertions::assert_eq;
use sqlsplit::{parse_script, split, KeywordGrammar, ParseContext, SplitOptions};

fn render(records: &[StatementRecord<'_>], json: bool) -> String {
    let mut out = Vec::new();
    let result = if json {
        write_json(&mut out, records)
    } else {
        write_text(&mut out, records)
    };
    assert!(result.is_ok());
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn text_lines_without_classification() {
    let slices = split("SELECT 1;\nSELECT 'a\tb'");
    assert_eq!(
        render(&slice_records(&slices), false),
        "0\t0..9\t-\t\"SELECT 1;\"\n1\t9..22\t-\t\"\\nSELECT 'a\\tb'\"\n"
    );
}

#[test]
fn text_lines_with_classification() {
    let Ok(statements) = parse_script(
        &KeywordGrammar::default(),
        "optimize table t;select 1",
        &ParseContext::default(),
        SplitOptions::default(),
    ) else {
        panic!("script should classify");
    };
    assert_eq!(
        render(&classified_records(&statements), false),
        "0\t0..17\tunparsed\t\"optimize table t;\"\n1\t17..25\tSELECT\t\"select 1\"\n"
    );
}

#[test]
fn json_omits_classification_when_splitting_only() {
    let slices = split(";");
    assert_eq!(
        render(&slice_records(&slices), true),
        "[\n  {\n    \"index\": 0,\n    \"start\": 0,\n    \"end\": 1,\n    \
         \"terminated\": true,\n    \"blank\": true,\n    \"text\": \";\"\n  }\n]\n"
    );
}

#[test]
fn json_records_keyword() {
    let Ok(statements) = parse_script(
        &KeywordGrammar::default(),
        "SHOW TABLES",
        &ParseContext::default(),
        SplitOptions::default(),
    ) else {
        panic!("script should classify");
    };
    let records = classified_records(&statements);
    assert_eq!(records[0].classification, Some("parsed"));
    assert_eq!(records[0].keyword, Some("SHOW"));
    let json = render(&records, true);
    assert!(json.contains("\"classification\": \"parsed\""));
    assert!(json.contains("\"keyword\": \"SHOW\""));
}
