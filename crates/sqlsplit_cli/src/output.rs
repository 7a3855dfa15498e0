//! Rendering statements as text lines or JSON.

use std::io::Write;

use serde::Serialize;
use sqlsplit::{Classification, ClassifiedStatement, KeywordStatement, StatementSlice};

use crate::CliError;

/// One statement as printed by the CLI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatementRecord<'a> {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub terminated: bool,
    pub blank: bool,
    /// `"parsed"` or `"unparsed"`; absent when not classifying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'a str>,
    pub text: &'a str,
}

impl<'a> StatementRecord<'a> {
    fn from_slice(index: usize, slice: &StatementSlice<'a>) -> Self {
        StatementRecord {
            index,
            start: slice.span.start,
            end: slice.span.end,
            terminated: slice.terminated,
            blank: slice.blank,
            classification: None,
            keyword: None,
            text: slice.text,
        }
    }
}

pub fn slice_records<'a>(slices: &[StatementSlice<'a>]) -> Vec<StatementRecord<'a>> {
    slices
        .iter()
        .enumerate()
        .map(|(index, slice)| StatementRecord::from_slice(index, slice))
        .collect()
}

pub fn classified_records<'s>(
    statements: &'s [ClassifiedStatement<'_, KeywordStatement>],
) -> Vec<StatementRecord<'s>> {
    statements
        .iter()
        .enumerate()
        .map(|(index, statement)| {
            let mut record = StatementRecord::from_slice(index, &statement.slice);
            match &statement.classification {
                Classification::Parsed(ast) => {
                    record.classification = Some("parsed");
                    record.keyword = Some(ast.keyword.as_str());
                }
                Classification::Unparsed => record.classification = Some("unparsed"),
            }
            record
        })
        .collect()
}

/// One line per statement: index, byte range, classification, and the
/// statement text as an escaped string literal.
pub fn write_text(out: &mut dyn Write, records: &[StatementRecord<'_>]) -> Result<(), CliError> {
    for record in records {
        let kind = match (record.classification, record.keyword) {
            (Some(_), Some(keyword)) => keyword,
            (Some(kind), None) => kind,
            (None, _) => "-",
        };
        writeln!(
            out,
            "{}\t{}..{}\t{}\t{:?}",
            record.index, record.start, record.end, kind, record.text
        )?;
    }
    Ok(())
}

pub fn write_json(out: &mut dyn Write, records: &[StatementRecord<'_>]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests;
