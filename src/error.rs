use crate::transaction::ParseError;
use thiserror::Error;

/// Anything that stops a run. Every variant is fatal, nothing is skipped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid arguments, expected exactly one transfer history file path")]
    Usage,
    #[error("File doesn't exist at {0}")]
    MissingFile(String),
    #[error("Can't read {0}: {1}")]
    Read(String, #[source] std::io::Error),
    #[error("{source}")]
    Transaction {
        line_number: usize,
        #[source]
        source: ParseError,
    },
    #[error("Total for {0} is too large")]
    Overflow(String),
    #[error("Can't write totals: {0}")]
    Output(#[from] std::io::Error),
}
