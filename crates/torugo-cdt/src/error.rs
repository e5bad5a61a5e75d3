use thiserror::Error;

/// Errors returned by the base-36 codec and the CDT encode paths.
///
/// Inspection-style operations ([`Cdt::is_valid`][crate::Cdt::is_valid],
/// [`Cdt::timestamp_of`][crate::Cdt::timestamp_of]) never return these;
/// they are total and answer with `bool`/`Option` instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CdtError {
    #[error("invalid base-36 digit {digit:?}")]
    InvalidDigit { digit: char },
    #[error("empty base-36 input")]
    EmptyInput,
    #[error("base-36 value overflows u64")]
    Overflow,
    #[error("timestamp {seconds} is outside the encodable range 0..={max}")]
    TimestampOutOfRange { seconds: i64, max: u64 },
    #[error("millisecond value {millis} is outside 0..=999")]
    MillisOutOfRange { millis: u16 },
    #[error("malformed CDT string {0:?}; expected 4-10 alphanumeric characters")]
    Malformed(String),
}
