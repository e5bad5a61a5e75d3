use crate::error::TuidError;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;
use std::str::FromStr;

use torugo_cdt::Cdt;

/// Width of the trailing, zero-padded CDT segment.
pub(crate) const CDT_WIDTH: usize = 10;

/// The three TUID layouts, distinguished by total length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 20 characters: `R7 "-TS" CDT10`.
    Short,
    /// 26 characters: `R8 "-" R4 "-TM" CDT10`.
    Medium,
    /// 36 characters: `R8 "-" R4 "-" R9 "-TL" CDT10`.
    Long,
}

impl Variant {
    /// Total identifier length for this layout.
    pub const fn total_len(&self) -> usize {
        match self {
            Variant::Short => 20,
            Variant::Medium => 26,
            Variant::Long => 36,
        }
    }

    /// The 2-character format tag preceding the CDT segment.
    pub const fn tag(&self) -> &'static str {
        match self {
            Variant::Short => "TS",
            Variant::Medium => "TM",
            Variant::Long => "TL",
        }
    }

    /// Maps an identifier length back to its layout.
    pub fn from_total_len(len: usize) -> Option<Variant> {
        match len {
            20 => Some(Variant::Short),
            26 => Some(Variant::Medium),
            36 => Some(Variant::Long),
            _ => None,
        }
    }
}

/// A Torugo Unique Identifier: random alphanumeric segments joined by
/// hyphens, a format tag, and a trailing zero-padded CDT time segment.
///
/// `Tuid` values are produced by
/// [`TuidGenerator`][crate::generator::TuidGenerator] or by validating
/// external input with [`Tuid::parse`]. Inspection of untrusted strings goes
/// through the total functions [`Tuid::validate`] and
/// [`Tuid::extract_timestamp`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tuid(SmolStr);

impl Tuid {
    /// Wraps a generator-produced identifier without re-validation.
    pub(crate) fn assemble(id: String) -> Self {
        debug_assert!(Self::validate(&id));
        Self(SmolStr::new(id))
    }

    /// Validates and wraps an externally supplied identifier.
    pub fn parse(s: &str) -> Result<Self, TuidError> {
        if !Self::validate(s) {
            return Err(TuidError::Malformed(s.to_string()));
        }
        Ok(Self(SmolStr::new(s)))
    }

    /// Whether `s` is structurally a TUID of any variant.
    ///
    /// Dispatches on length, then checks the exact layout: leading letter,
    /// segment widths, hyphen positions, format tag and the 10-character CDT
    /// tail. Uppercase only.
    pub fn validate(s: &str) -> bool {
        let Some(variant) = Variant::from_total_len(s.len()) else {
            return false;
        };
        matches_layout(s.as_bytes(), variant)
    }

    /// Recovers the embedded instant from an identifier string.
    ///
    /// Total: returns `None` when `s` is not a valid TUID, or when the CDT
    /// tail is empty or too short after stripping its zero padding (an
    /// all-zeros time segment).
    pub fn extract_timestamp(s: &str) -> Option<Timestamp> {
        if !Self::validate(s) {
            return None;
        }
        let cdt = &s[s.len() - CDT_WIDTH..];
        Cdt::timestamp_of(cdt.trim_start_matches('0'))
    }

    /// The embedded instant of this identifier.
    pub fn timestamp(&self) -> Option<Timestamp> {
        Self::extract_timestamp(&self.0)
    }

    /// This identifier's layout.
    pub fn variant(&self) -> Variant {
        Variant::from_total_len(self.0.len()).expect("validated TUID has a known length")
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_segment_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

fn is_segment(bytes: &[u8]) -> bool {
    bytes.iter().copied().all(is_segment_byte)
}

fn matches_layout(b: &[u8], variant: Variant) -> bool {
    // Lengths are already checked by dispatch, so slicing below is in-bounds.
    match variant {
        Variant::Short => {
            b[0].is_ascii_uppercase()
                && is_segment(&b[1..7])
                && b[7] == b'-'
                && &b[8..10] == b"TS"
                && is_segment(&b[10..20])
        }
        Variant::Medium => {
            b[0].is_ascii_uppercase()
                && is_segment(&b[1..8])
                && b[8] == b'-'
                && is_segment(&b[9..13])
                && b[13] == b'-'
                && &b[14..16] == b"TM"
                && is_segment(&b[16..26])
        }
        Variant::Long => {
            b[0].is_ascii_uppercase()
                && is_segment(&b[1..8])
                && b[8] == b'-'
                && is_segment(&b[9..13])
                && b[13] == b'-'
                && is_segment(&b[14..23])
                && b[23] == b'-'
                && &b[24..26] == b"TL"
                && is_segment(&b[26..36])
        }
    }
}

impl std::fmt::Debug for Tuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tuid").field(&self.0).finish()
    }
}

impl Display for Tuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tuid {
    type Err = TuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Tuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Tuid::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_identifiers() {
        assert!(Tuid::validate("Q0RTBAW-TS0SHUIBP4QS"));
        assert!(Tuid::validate("Y57WW6D6-T8KH-TM0SHUICT2FQ"));
        assert!(Tuid::validate("UWIZ248Q-UT2V-6EN8QN2VT-TL0SHUIF31SS"));
    }

    #[test]
    fn rejects_wrong_tags() {
        assert!(!Tuid::validate("Q0RTBAW-TX0SHUIBP4QS"));
        assert!(!Tuid::validate("Y57WW6D6-T8KH-TX0SHUICT2FQ"));
        assert!(!Tuid::validate("UWIZ248Q-UT2V-6EN8QN2VT-TX0SHUIF31SS"));
        // Tag of the wrong variant for the length.
        assert!(!Tuid::validate("Q0RTBAW-TM0SHUIBP4QS"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        // One short, one long of each boundary.
        assert!(!Tuid::validate("Q0RTBAW-TS0SHUIBP4Q"));
        assert!(!Tuid::validate("UWIZ248Q-UT2V-6EN8QN2VT-TL0SHUIF31SSX"));
        assert!(!Tuid::validate(""));
    }

    #[test]
    fn rejects_structural_mismatches() {
        // Leading digit.
        assert!(!Tuid::validate("00RTBAW-TS0SHUIBP4QS"));
        // Lowercase body.
        assert!(!Tuid::validate("q0rtbaw-TS0SHUIBP4QS"));
        // Misplaced hyphen.
        assert!(!Tuid::validate("Q0RTBA-WTS0SHUIBP4QS"));
        // Hyphen inside the CDT tail.
        assert!(!Tuid::validate("Q0RTBAW-TS0SHUIB-4QS"));
    }

    #[test]
    fn variant_is_derived_from_length() {
        let tuid = Tuid::parse("Q0RTBAW-TS0SHUIBP4QS").unwrap();
        assert_eq!(tuid.variant(), Variant::Short);
        let tuid = Tuid::parse("Y57WW6D6-T8KH-TM0SHUICT2FQ").unwrap();
        assert_eq!(tuid.variant(), Variant::Medium);
        let tuid = Tuid::parse("UWIZ248Q-UT2V-6EN8QN2VT-TL0SHUIF31SS").unwrap();
        assert_eq!(tuid.variant(), Variant::Long);
    }

    #[test]
    fn parse_rejects_malformed_identifiers() {
        assert_eq!(
            Tuid::parse("not-a-tuid"),
            Err(TuidError::Malformed("not-a-tuid".to_string()))
        );
    }

    #[test]
    fn extracts_embedded_instant() {
        // Tail "0SHUIBP4QS" strips to the 9-character CDT "SHUIBP4QS".
        let ts = Tuid::extract_timestamp("Q0RTBAW-TS0SHUIBP4QS").unwrap();
        let cdt = Cdt::parse("SHUIBP4QS").unwrap();
        assert_eq!(ts, cdt.to_timestamp());
    }

    #[test]
    fn extraction_is_total() {
        // Malformed tag.
        assert!(Tuid::extract_timestamp("Q0RTBAW-TX0SHUIBP4QS").is_none());
        // Wrong length.
        assert!(Tuid::extract_timestamp("Q0RTBAW").is_none());
        // All-zeros time segment strips to an empty CDT.
        assert!(Tuid::extract_timestamp("Q0RTBAW-TS0000000000").is_none());
        // Strips to a CDT below the 4-character minimum.
        assert!(Tuid::extract_timestamp("Q0RTBAW-TS0000000YA0").is_none());
    }

    #[test]
    fn serde_round_trip_validates() {
        let tuid = Tuid::parse("Q0RTBAW-TS0SHUIBP4QS").unwrap();
        let json = serde_json::to_string(&tuid).unwrap();
        assert_eq!(json, "\"Q0RTBAW-TS0SHUIBP4QS\"");
        let back: Tuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuid);

        let malformed: Result<Tuid, _> = serde_json::from_str("\"Q0RTBAW-TX0SHUIBP4QS\"");
        assert!(malformed.is_err());
    }
}
