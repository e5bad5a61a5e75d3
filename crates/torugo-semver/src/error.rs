use thiserror::Error;

/// Errors returned when parsing a semantic version number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SemVerError {
    #[error("invalid version number {0:?}")]
    Invalid(String),
}
