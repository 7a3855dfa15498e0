//! `sqlsplit` command-line front end.
//!
//! Reads a script, splits it (optionally classifying each statement with
//! [`KeywordGrammar`]) and prints one record per statement.

use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Once;

use sqlsplit::{parse_script, split_with, KeywordGrammar, ParseContext};

pub mod args;
mod error;
pub mod output;

pub use args::{parse_args, CliArgs, Command, USAGE};
pub use error::CliError;

use output::StatementRecord;

static TRACING_INIT: Once = Once::new();

/// Install a stderr `tracing` subscriber when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Read the whole script from `path`, or stdin when `None`.
///
/// Invalid UTF-8 is replaced with U+FFFD.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    let bytes = match path {
        Some(path) => std::fs::read(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(CliError::Stdin)?;
            bytes
        }
    };

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "input is not valid UTF-8; replacing invalid sequences"
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Split (and optionally classify) `input`, writing records to `out`.
pub fn run(args: &CliArgs, input: &str, out: &mut dyn Write) -> Result<(), CliError> {
    if args.classify {
        let engine = KeywordGrammar::default().with_scan_options(args.options.scan);
        let context = ParseContext {
            charset: args.charset.as_deref(),
            collation: args.collation.as_deref(),
        };
        let statements = parse_script(&engine, input, &context, args.options)?;
        emit(args, out, &output::classified_records(&statements))
    } else {
        let slices = split_with(input, args.options);
        emit(args, out, &output::slice_records(&slices))
    }
}

fn emit(args: &CliArgs, out: &mut dyn Write, records: &[StatementRecord<'_>]) -> Result<(), CliError> {
    if args.json {
        output::write_json(out, records)
    } else {
        output::write_text(out, records)
    }
}
