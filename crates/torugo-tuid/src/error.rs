use thiserror::Error;

/// Errors returned by the typed TUID constructors.
///
/// [`Tuid::validate`][crate::Tuid::validate] and
/// [`Tuid::extract_timestamp`][crate::Tuid::extract_timestamp] are total and
/// never return these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TuidError {
    #[error("malformed TUID {0:?}; expected a 20, 26 or 36 character identifier")]
    Malformed(String),
}
