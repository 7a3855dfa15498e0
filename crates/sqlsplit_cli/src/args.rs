//! Command-line argument parsing.

use std::path::PathBuf;

use sqlsplit::SplitOptions;

use crate::CliError;

pub const USAGE: &str = "\
Usage: sqlsplit [OPTIONS] [FILE]

Split a SQL script into statements. Reads FILE, or stdin when FILE is
absent or '-'.

Options:
  --classify               Classify statements by leading keyword
  --json                   Emit JSON instead of one line per statement
  --skip-blank             Drop statements with no SQL in them
  --no-backslash-escapes   Treat '\\' as ordinary text in strings
  --no-hash-comments       Treat '#' as ordinary text
  --charset=<name>         Session charset passed to the grammar
  --collation=<name>       Session collation passed to the grammar
  -h, --help               Show this help";

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Split(CliArgs),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Script to read; `None` reads stdin.
    pub input: Option<PathBuf>,
    pub classify: bool,
    pub json: bool,
    pub options: SplitOptions,
    pub charset: Option<String>,
    pub collation: Option<String>,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut input: Option<String> = None;

    for arg in args {
        if let Some(charset) = arg.strip_prefix("--charset=") {
            parsed.charset = Some(non_empty("--charset", charset)?);
        } else if let Some(collation) = arg.strip_prefix("--collation=") {
            parsed.collation = Some(non_empty("--collation", collation)?);
        } else {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--classify" => parsed.classify = true,
                "--json" => parsed.json = true,
                "--skip-blank" => parsed.options = parsed.options.skip_blank(),
                "--no-backslash-escapes" => parsed.options.scan.backslash_escapes = false,
                "--no-hash-comments" => parsed.options.scan.hash_comments = false,
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(CliError::Usage(format!("unknown option '{flag}'")));
                }
                path if input.is_none() => input = Some(path.to_owned()),
                _ => {
                    return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
                }
            }
        }
    }

    parsed.input = input.filter(|path| path != "-").map(PathBuf::from);
    Ok(Command::Split(parsed))
}

fn non_empty(flag: &str, value: &str) -> Result<String, CliError> {
    if value.is_empty() {
        return Err(CliError::Usage(format!("{flag} needs a value")));
    }
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests;
