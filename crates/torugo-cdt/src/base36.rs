//! Base-36 integer codec over the digit set `0-9A-Z`.

use crate::error::CdtError;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes a non-negative integer as uppercase base-36.
///
/// No leading zeros are produced; zero itself encodes to `"0"`.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    // u64::MAX needs 13 base-36 digits.
    let mut buf = [0u8; 13];
    let mut at = buf.len();
    while n > 0 {
        at -= 1;
        buf[at] = DIGITS[(n % 36) as usize];
        n /= 36;
    }

    String::from_utf8(buf[at..].to_vec()).expect("base-36 digits are ASCII")
}

/// Decodes a base-36 string, case-insensitively.
pub fn decode(s: &str) -> Result<u64, CdtError> {
    if s.is_empty() {
        return Err(CdtError::EmptyInput);
    }

    let mut value: u64 = 0;
    for digit in s.chars() {
        let d = digit
            .to_digit(36)
            .ok_or(CdtError::InvalidDigit { digit })?;
        value = value
            .checked_mul(36)
            .and_then(|v| v.checked_add(u64::from(d)))
            .ok_or(CdtError::Overflow)?;
    }

    Ok(value)
}
