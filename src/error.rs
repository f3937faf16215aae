//! Error types for dictionary construction and starter selection

use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Failure while building a dictionary from its word source
///
/// An empty source is not an error: it yields an empty dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("failed to open word list {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a bounded starter-word search
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StarterError {
    #[error("dictionary has no words of length {length}")]
    NoWordsOfLength { length: usize },
    #[error("no starter of length {length} found after {attempts} attempts")]
    AttemptsExhausted { length: usize, attempts: usize },
    #[error("no starter of length {length} found within {budget:?}")]
    TimedOut { length: usize, budget: Duration },
}
