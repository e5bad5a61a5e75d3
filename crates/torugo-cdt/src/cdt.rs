use crate::base36;
use crate::clock::{Clock, SystemClock};
use crate::error::CdtError;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;
use std::str::FromStr;

/// Largest encodable integer-seconds value (≈ year 5138).
pub const MAX_SECONDS: u64 = 99_999_999_999;

const MIN_LEN: usize = 4;
const MAX_LEN: usize = 10;
/// The trailing fractional segment is always this many characters.
const FRAC_WIDTH: usize = 3;

/// A Compressed Date-Time: a Unix instant packed into a short base-36 string.
///
/// The string is two concatenated segments with no separator: a base-36
/// encoding of the integer seconds, then a 3-character left-zero-padded
/// base-36 encoding of the sub-second digits. The split point on decode is
/// positional (the last 3 characters are always the fractional segment).
///
/// The fractional rules are lexical, not numeric, and are kept bit-compatible
/// with previously issued CDT values:
///
/// * encoding reads the digit string after the decimal point as a literal
///   integer (`.1234` → 1234, `.0123` → 123) rather than scaling to
///   milliseconds;
/// * decoding re-pads the decoded integer to 4 digits and reads it as
///   `0.XXXX` seconds, so a 3-digit fraction comes back one decimal place
///   smaller than it went in (`.789` → `"0LX"` → 0.0789 s).
///
/// Do not "correct" either rule; existing identifiers depend on both.
///
/// # Examples
///
/// ```
/// use torugo_cdt::Cdt;
///
/// let cdt = Cdt::from_unix_secs(416410245.1234).unwrap();
/// assert_eq!(cdt.as_str(), "6VX4790YA");
/// assert_eq!(cdt.decode(), (416410245, 1234));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cdt(SmolStr);

impl Cdt {
    /// Encodes the current instant, read from the system clock.
    pub fn now() -> Self {
        Self::from_clock(&SystemClock)
    }

    /// Encodes the current instant of the given clock.
    pub fn from_clock<C: Clock>(clock: &C) -> Self {
        // The wall clock stays within the encodable range until year 5138.
        Self::from_timestamp(clock.now()).expect("clock instant within encodable range")
    }

    /// Encodes a [`Timestamp`] at microsecond precision.
    ///
    /// Fails with [`CdtError::TimestampOutOfRange`] for pre-epoch instants
    /// and for instants past [`MAX_SECONDS`].
    pub fn from_timestamp(timestamp: Timestamp) -> Result<Self, CdtError> {
        let seconds = timestamp.as_second();
        let micros = timestamp.subsec_microsecond();
        if seconds < 0 || micros < 0 || seconds as u64 > MAX_SECONDS {
            return Err(CdtError::TimestampOutOfRange {
                seconds,
                max: MAX_SECONDS,
            });
        }

        // Render the sub-second part the way a decimal literal prints:
        // fixed six places, then trailing zeros dropped, then the remaining
        // digits read as a literal integer.
        let mut digits = format!("{micros:06}");
        while digits.ends_with('0') {
            digits.pop();
        }
        let frac = if digits.is_empty() {
            0
        } else {
            digits.parse().expect("fraction digits are numeric")
        };

        Ok(Self::assemble(seconds as u64, frac))
    }

    /// Encodes a float of seconds since the Unix epoch.
    ///
    /// The fractional digits of the shortest decimal rendering are read as a
    /// literal integer (at most six places), matching [`Cdt`]'s lexical
    /// fraction rule.
    pub fn from_unix_secs(secs: f64) -> Result<Self, CdtError> {
        if !(secs >= 0.0 && secs <= MAX_SECONDS as f64) {
            return Err(CdtError::TimestampOutOfRange {
                seconds: secs as i64,
                max: MAX_SECONDS,
            });
        }

        let rendered = format!("{secs}");
        let frac = match rendered.split_once('.') {
            None => 0,
            Some((_, digits)) => {
                let digits: String = digits.chars().take(6).collect();
                digits.parse().expect("fraction digits are numeric")
            }
        };

        Ok(Self::assemble(secs.trunc() as u64, frac))
    }

    /// Encodes explicit integer parts.
    ///
    /// Fails if `seconds` exceeds [`MAX_SECONDS`] or `millis` exceeds 999.
    pub fn from_parts(seconds: u64, millis: u16) -> Result<Self, CdtError> {
        if seconds > MAX_SECONDS {
            return Err(CdtError::TimestampOutOfRange {
                seconds: seconds as i64,
                max: MAX_SECONDS,
            });
        }
        if millis > 999 {
            return Err(CdtError::MillisOutOfRange { millis });
        }

        Ok(Self::assemble(seconds, u64::from(millis)))
    }

    fn assemble(seconds: u64, frac: u64) -> Self {
        let sec_part = base36::encode(seconds);
        let frac_part = base36::encode(frac);

        let mut out = String::with_capacity(sec_part.len() + FRAC_WIDTH);
        out.push_str(&sec_part);
        for _ in frac_part.len()..FRAC_WIDTH {
            out.push('0');
        }
        out.push_str(&frac_part);

        Self(SmolStr::new(out))
    }

    /// Whether `s` is structurally a CDT: 4-10 alphanumeric characters.
    pub fn is_valid(s: &str) -> bool {
        (MIN_LEN..=MAX_LEN).contains(&s.len())
            && s.bytes().all(|b| b.is_ascii_alphanumeric())
    }

    /// Validates and wraps an externally supplied CDT string.
    pub fn parse(s: &str) -> Result<Self, CdtError> {
        if !Self::is_valid(s) {
            return Err(CdtError::Malformed(s.to_string()));
        }
        Ok(Self(SmolStr::new(s)))
    }

    /// Splits into `(seconds, fraction)`.
    ///
    /// The fraction is the raw decoded integer of the last 3 characters
    /// (0..=46655), not a value clamped to milliseconds.
    pub fn decode(&self) -> (u64, u16) {
        let split = self.0.len() - FRAC_WIDTH;
        let seconds =
            base36::decode(&self.0[..split]).expect("validated CDT is base-36");
        let frac = base36::decode(&self.0[split..]).expect("validated CDT is base-36");
        (seconds, frac as u16)
    }

    /// Reconstructs the encoded instant.
    ///
    /// Applies the compatibility padding rule: the decoded fraction's digit
    /// string is left-zero-padded to at least 4 places and read as `0.XXXX`
    /// seconds.
    pub fn to_timestamp(&self) -> Timestamp {
        let (seconds, frac) = self.decode();
        Timestamp::new(seconds as i64, frac_nanos(frac))
            .expect("decoded CDT instant is a representable timestamp")
    }

    /// Decodes an arbitrary string to an instant; `None` if it is not a CDT.
    pub fn timestamp_of(s: &str) -> Option<Timestamp> {
        Self::parse(s).ok().map(|cdt| cdt.to_timestamp())
    }

    /// Returns the CDT as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reads a decoded fraction as `0.XXXX` seconds, in nanoseconds.
///
/// The digit string is padded to at least 4 places, so 789 means 0.0789 s
/// while 1234 means 0.1234 s. A 5-digit fraction (up to 46655 from 3 base-36
/// characters) keeps its own width.
fn frac_nanos(frac: u16) -> i32 {
    let places = frac.to_string().len().max(4) as u32;
    (i64::from(frac) * 10_i64.pow(9 - places)) as i32
}

impl std::fmt::Debug for Cdt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Cdt").field(&self.0).finish()
    }
}

impl Display for Cdt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cdt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cdt {
    type Err = CdtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Cdt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cdt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Cdt::parse(&s).map_err(serde::de::Error::custom)
    }
}
