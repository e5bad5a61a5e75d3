use thiserror::Error;

/// Errors returned by the random string and password generators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RandError {
    #[error("length must be greater than zero")]
    InvalidLength,
    #[error("no character pool is enabled")]
    EmptyPool,
    #[error("min and max must be non-negative, got {min}..={max}")]
    NegativeBound { min: i64, max: i64 },
    #[error("cannot begin with a letter when both letter pools are disabled")]
    NoLetterPool,
}
