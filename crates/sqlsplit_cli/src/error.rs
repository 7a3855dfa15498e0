use std::io;
use std::path::PathBuf;

use sqlsplit::DispatchError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl CliError {
    /// Process exit code: 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}
