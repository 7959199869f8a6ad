//! Error type for wordlist generation requests.

use thiserror::Error;

/// Rejected generation parameters or a failing candidate source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// A wordlist size below zero was requested.
    #[error("wordlist size must not be negative (got {0})")]
    NegativeSize(i64),
    /// A keyword word budget below zero was requested.
    #[error("max words must not be negative (got {0})")]
    NegativeMaxWords(i64),
    /// Requested size exceeds the hard upper bound.
    #[error("requested {requested} words, limit is {limit}")]
    SizeTooLarge { requested: i64, limit: usize },
    /// Every candidate for a keyword was rejected by the sanitizer.
    #[error("no usable words for keyword '{keyword}': all {rejected} candidates were rejected")]
    NoUsableCandidates { keyword: String, rejected: usize },
    /// A candidate source could not produce candidates.
    #[error("candidate source '{source_name}' failed: {reason}")]
    Source { source_name: String, reason: String },
}
