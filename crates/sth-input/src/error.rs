//! Error types for sth-input.

use sth_core::SthError;
use thiserror::Error;

/// Errors that can occur while loading or batch-hashing records.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record parse error: {0}")]
    Parse(String),

    /// A row parsed but describes an invalid record.
    #[error("line {line}: {source}")]
    Record {
        line:   usize,
        #[source]
        source: SthError,
    },

    /// Hashing record `index` of a batch failed.
    #[error("record {index}: {source}")]
    Hash {
        index:  usize,
        #[source]
        source: SthError,
    },

    /// The hash configuration was rejected before any row was read.
    #[error(transparent)]
    Config(#[from] SthError),
}

/// Alias for `Result<T, InputError>`.
pub type InputResult<T> = Result<T, InputError>;
