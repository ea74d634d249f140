//! Error type shared by the quantizers and the hasher.
//!
//! `sth-input` wraps `SthError` as one variant of its own error enum; the
//! hasher crate returns it unchanged.

use thiserror::Error;

/// The top-level error type for `sth-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SthError {
    /// A record or configuration value lies outside its valid domain:
    /// zero time step, non-finite coordinate, `begin > end`, or a precision
    /// whose grid step is not representable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The hash configuration is unusable (currently: empty key).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Text could not be read as a coordinate or hash token.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `sth-*` crates.
pub type SthResult<T> = Result<T, SthError>;
