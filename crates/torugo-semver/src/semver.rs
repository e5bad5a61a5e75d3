use crate::error::SemVerError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// A parsed semantic version number per <https://semver.org> rules.
///
/// Comparison follows the original utility's scheme rather than the full
/// semver identifier-by-identifier algorithm: the pre-release label is ranked
/// (`alpha < beta < rc < ` release), ties break on the label's numeric
/// suffix, and equal pre-releases fall through to the build number.
///
/// # Examples
///
/// ```
/// use torugo_semver::SemVer;
///
/// let v: SemVer = "1.1.0-alpha+134".parse().unwrap();
/// assert_eq!(v.major, 1);
/// assert_eq!(v.pre_release, "alpha");
/// assert_eq!(v.build, 134);
/// assert!(v < "1.1.0-beta".parse().unwrap());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Lowercased pre-release identifiers; empty for a release version.
    pub pre_release: String,
    /// Build metadata read as its leading numeric prefix; 0 when absent or
    /// non-numeric.
    pub build: u64,
    version: String,
}

impl SemVer {
    /// Parses and validates a version string.
    pub fn parse(version: &str) -> Result<Self, SemVerError> {
        let invalid = || SemVerError::Invalid(version.to_string());

        let (rest, build_meta) = match version.split_once('+') {
            Some((rest, meta)) => (rest, Some(meta)),
            None => (version, None),
        };
        // Pre-release identifiers may themselves contain hyphens, but the
        // numeric core never does, so the first hyphen is the split point.
        let (core, pre_release) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let mut numbers = core.split('.');
        let major = numeric_identifier(numbers.next()).ok_or_else(invalid)?;
        let minor = numeric_identifier(numbers.next()).ok_or_else(invalid)?;
        let patch = numeric_identifier(numbers.next()).ok_or_else(invalid)?;
        if numbers.next().is_some() {
            return Err(invalid());
        }

        if let Some(pre) = pre_release {
            if !pre.split('.').all(is_pre_release_identifier) {
                return Err(invalid());
            }
        }
        if let Some(meta) = build_meta {
            if !meta.split('.').all(is_build_identifier) {
                return Err(invalid());
            }
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre_release: pre_release.unwrap_or_default().to_lowercase(),
            build: leading_number(build_meta.unwrap_or_default()),
            version: version.to_string(),
        })
    }

    /// Compares against another version string.
    pub fn compare_to(&self, other: &str) -> Result<Ordering, SemVerError> {
        Ok(self.cmp(&Self::parse(other)?))
    }

    /// The original version string.
    pub fn as_str(&self) -> &str {
        &self.version
    }

    fn cmp_pre_release(&self, other: &Self) -> Ordering {
        let by_label = label_rank(&self.pre_release).cmp(&label_rank(&other.pre_release));
        if by_label != Ordering::Equal {
            return by_label;
        }
        digit_suffix(&self.pre_release).cmp(&digit_suffix(&other.pre_release))
    }
}

/// A numeric version core identifier: digits only, no leading zeros.
fn numeric_identifier(part: Option<&str>) -> Option<u64> {
    let part = part?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse().ok()
}

/// A pre-release identifier: alphanumeric/hyphen, non-empty, and when fully
/// numeric it must not carry leading zeros.
fn is_pre_release_identifier(id: &str) -> bool {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return false;
    }
    let numeric = id.bytes().all(|b| b.is_ascii_digit());
    !(numeric && id.len() > 1 && id.starts_with('0'))
}

/// A build metadata identifier: alphanumeric/hyphen, non-empty.
fn is_build_identifier(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Reads the leading decimal digits of `s` as a number; 0 when there are
/// none or they overflow.
fn leading_number(s: &str) -> u64 {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Ranks a pre-release by its letters: `alpha` < `beta` < `rc` < anything
/// else, including the empty pre-release of a final version.
fn label_rank(pre_release: &str) -> u8 {
    let letters: String = pre_release
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    match letters.as_str() {
        "alpha" => 1,
        "beta" => 2,
        "rc" => 3,
        _ => 4,
    }
}

/// The digits of a pre-release, concatenated and read as one number
/// (`alpha.1` → 1, `alpha` → 0).
fn digit_suffix(pre_release: &str) -> u64 {
    let digits: String = pre_release.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

impl FromStr for SemVer {
    type Err = SemVerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for SemVer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.version)
    }
}

impl Ord for SemVer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.cmp_pre_release(other))
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the comparison scheme, not raw string equality, so that
// Ord and Eq agree.
impl PartialEq for SemVer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemVer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_version_parts() {
        let version = SemVer::parse("1.1.0-alpha+134").unwrap();
        assert_eq!(version.major, 1);
        assert_eq!(version.minor, 1);
        assert_eq!(version.patch, 0);
        assert_eq!(version.pre_release, "alpha");
        assert_eq!(version.build, 134);
        assert_eq!(version.as_str(), "1.1.0-alpha+134");
    }

    #[test]
    fn rejects_malformed_versions() {
        for bad in [
            "1.0",
            "1.0.0.0",
            "01.0.0",
            "1.0.0-",
            "1.0.0-alpha..1",
            "1.0.0-alpha.01",
            "1.0.0+",
            "1.0.0+meta.",
            "a.b.c",
            "1.0.0 ",
            "",
        ] {
            assert_eq!(
                SemVer::parse(bad),
                Err(SemVerError::Invalid(bad.to_string())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn smaller_comparisons() {
        let pairs = [
            ("0.0.1", "1.0.1"),
            ("1.0.0", "1.0.1"),
            ("1.0.9", "1.1.0"),
            ("1.0.0", "2.0.0"),
            ("1.0.0-alpha", "1.0.0-alpha.1"),
            ("1.0.0-alpha.1", "1.0.0-alpha.2"),
            ("1.0.0-alpha", "1.0.0-beta"),
            ("1.0.0-alpha.1", "1.0.0-beta"),
            ("1.0.0-beta", "1.0.0-beta.1"),
            ("1.0.0-beta.1", "1.0.0-beta.2"),
            ("1.0.0-beta", "1.0.0-rc"),
            ("1.0.0-beta.1", "1.0.0-rc"),
            ("1.0.0-rc", "1.0.0-rc.1"),
            ("1.0.0-rc", "1.0.0"),
            ("1.0.0-rc.1", "1.0.0"),
            ("1.0.0+11", "1.0.0+12"),
            ("1.0.0-beta.2+167", "1.0.0-beta.2+234"),
        ];
        for (left, right) in pairs {
            let version = SemVer::parse(left).unwrap();
            assert_eq!(
                version.compare_to(right).unwrap(),
                Ordering::Less,
                "{left} should be smaller than {right}"
            );
        }
    }

    #[test]
    fn bigger_comparisons() {
        let pairs = [
            ("1.0.1", "1.0.0"),
            ("2.0.0", "1.0.0"),
            ("1.0.0-alpha.1", "1.0.0-alpha"),
            ("1.0.0-beta", "1.0.0-alpha.1"),
            ("1.0.0-rc", "1.0.0-beta.1"),
            ("1.0.0", "1.0.0-rc.1"),
            ("3.2.6+145", "3.2.6+123"),
            ("1.0.0+600", "1.0.0-alpha.1+650"),
            ("1.0.0-alpha.2+988", "1.0.0-alpha.2+987"),
        ];
        for (left, right) in pairs {
            let version = SemVer::parse(left).unwrap();
            assert_eq!(
                version.compare_to(right).unwrap(),
                Ordering::Greater,
                "{left} should be bigger than {right}"
            );
        }
    }

    #[test]
    fn equal_comparisons() {
        for v in [
            "1.0.0",
            "1.1.1+13",
            "1.0.0-alpha",
            "1.0.0-beta.2",
            "1.0.0-rc.1",
            "1.0.0-alpha.2+988",
        ] {
            let version = SemVer::parse(v).unwrap();
            assert_eq!(version.compare_to(v).unwrap(), Ordering::Equal);
        }
    }

    #[test]
    fn ordering_matches_comparison() {
        let alpha: SemVer = "1.0.0-alpha".parse().unwrap();
        let beta: SemVer = "1.0.0-beta".parse().unwrap();
        let release: SemVer = "1.0.0".parse().unwrap();
        assert!(alpha < beta);
        assert!(beta < release);
        assert_eq!(alpha, "1.0.0-ALPHA".parse().unwrap());
    }

    #[test]
    fn hyphenated_pre_release_parses() {
        let version = SemVer::parse("1.0.0-x-y-z.1").unwrap();
        assert_eq!(version.pre_release, "x-y-z.1");
    }
}
