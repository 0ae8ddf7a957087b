use thiserror::Error;

/// Errors produced by this crate.
///
/// The aggregations themselves never fail on their own; their `try_` variants
/// return the caller's error type unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A tagged record lacked the field it was supposed to be keyed by.
    #[error("record at index {index} has no `{field}` field")]
    MissingField { index: usize, field: String },

    /// A tagged record had the field, but its value could not serve as a key.
    #[error("record at index {index} has a `{field}` field that is not a key")]
    NotAKey { index: usize, field: String },
}

/// A [`Result`](std::result::Result) defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
