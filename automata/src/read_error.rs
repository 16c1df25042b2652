
use std::io;

use thiserror::Error;

/// Failure to read a parsing table from its source.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Couldn't open {path} : {source}")]
    Unavailable {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{file}:{line}\nMalformed row \"{text}\", expected a non-terminal and a lookahead.")]
    MalformedRow {
        file: String,
        line: usize,
        text: String,
    },
}

impl TableError {
    /// True when the source itself could not be read (as opposed to
    /// a source that was read but is not a valid table).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, TableError::Unavailable {..})
    }
}
