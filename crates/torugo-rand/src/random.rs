use crate::error::RandError;
use typed_builder::TypedBuilder;

/// Default alphabetic pool, both cases.
pub const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Default numeric pool.
pub const NUMBERS: &str = "0123456789";
/// Default special-character pool.
pub const SYMBOLS: &str = "!;#%&()*+,-./:;<=>?@[]^_{|}~";

/// Configures a [`Random`] generator: which pools are drawn from and whether
/// the output must start with a letter.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomSettings {
    #[builder(default = true)]
    pub include_alpha: bool,
    #[builder(default = true)]
    pub include_numbers: bool,
    #[builder(default = true)]
    pub include_symbols: bool,
    #[builder(default = false)]
    pub start_with_alpha: bool,
    #[builder(default = ALPHA.to_string())]
    pub alpha: String,
    #[builder(default = NUMBERS.to_string())]
    pub numbers: String,
    #[builder(default = SYMBOLS.to_string())]
    pub symbols: String,
}

impl Default for RandomSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Random string and number generator over configurable character pools.
pub struct Random {
    settings: RandomSettings,
}

impl Random {
    pub fn new(settings: RandomSettings) -> Self {
        Self { settings }
    }

    /// Generates a random string of `len` characters from the enabled pools.
    ///
    /// Fails on a zero length and when every pool is disabled or empty.
    pub fn string(&self, len: usize) -> Result<String, RandError> {
        if len == 0 {
            return Err(RandError::InvalidLength);
        }

        let mut pool = String::new();
        if self.settings.include_alpha {
            pool.push_str(&self.settings.alpha);
        }
        if self.settings.include_numbers {
            pool.push_str(&self.settings.numbers);
        }
        if self.settings.include_symbols {
            pool.push_str(&self.settings.symbols);
        }

        let pool: Vec<char> = pool.chars().collect();
        if pool.is_empty() {
            return Err(RandError::EmptyPool);
        }

        let alpha: Vec<char> = self.settings.alpha.chars().collect();
        if self.settings.start_with_alpha && alpha.is_empty() {
            return Err(RandError::NoLetterPool);
        }

        let mut out = String::with_capacity(len);
        for at in 0..len {
            let source = if at == 0 && self.settings.start_with_alpha {
                &alpha
            } else {
                &pool
            };
            out.push(source[fastrand::usize(..source.len())]);
        }

        Ok(out)
    }

    /// Uniform random integer in `min..=max`.
    ///
    /// A reversed range is swapped rather than rejected.
    pub fn number(&self, min: i64, max: i64) -> i64 {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        fastrand::i64(min..=max)
    }

    /// Positive random integer rendered with leading zeros.
    ///
    /// The output width is `width` when given, but never narrower than the
    /// decimal width of `max`.
    pub fn lz_number(
        &self,
        min: i64,
        max: i64,
        width: Option<usize>,
    ) -> Result<String, RandError> {
        if min < 0 || max < 0 {
            return Err(RandError::NegativeBound { min, max });
        }

        let max_width = max.max(min).to_string().len();
        let width = width.unwrap_or(max_width).max(max_width);
        let n = self.number(min, max);

        Ok(format!("{n:0>width$}"))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new(RandomSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_has_requested_length_and_charset() {
        let random = Random::default();
        let s = random.string(128).unwrap();
        assert_eq!(s.chars().count(), 128);
        assert!(s
            .chars()
            .all(|c| ALPHA.contains(c) || NUMBERS.contains(c) || SYMBOLS.contains(c)));
    }

    #[test]
    fn zero_length_is_rejected() {
        let random = Random::default();
        assert_eq!(random.string(0), Err(RandError::InvalidLength));
    }

    #[test]
    fn disabled_pools_are_excluded() {
        let settings = RandomSettings::builder()
            .include_alpha(false)
            .include_symbols(false)
            .build();
        let random = Random::new(settings);
        let s = random.string(64).unwrap();
        assert!(s.chars().all(|c| NUMBERS.contains(c)));
    }

    #[test]
    fn all_pools_disabled_is_an_error() {
        let settings = RandomSettings::builder()
            .include_alpha(false)
            .include_numbers(false)
            .include_symbols(false)
            .build();
        let random = Random::new(settings);
        assert_eq!(random.string(8), Err(RandError::EmptyPool));
    }

    #[test]
    fn start_with_alpha_pins_the_first_character() {
        let settings = RandomSettings::builder().start_with_alpha(true).build();
        let random = Random::new(settings);
        for _ in 0..32 {
            let s = random.string(8).unwrap();
            assert!(s.chars().next().unwrap().is_ascii_alphabetic());
        }
    }

    #[test]
    fn custom_pools_are_honored() {
        let settings = RandomSettings::builder()
            .include_numbers(false)
            .include_symbols(false)
            .alpha("ab".to_string())
            .build();
        let random = Random::new(settings);
        let s = random.string(32).unwrap();
        assert!(s.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn number_is_inclusive_and_swaps_reversed_ranges() {
        let random = Random::default();
        for _ in 0..64 {
            let n = random.number(10, 1);
            assert!((1..=10).contains(&n));
        }
        assert_eq!(random.number(7, 7), 7);
    }

    #[test]
    fn lz_number_pads_to_width() {
        let random = Random::default();
        let s = random.lz_number(0, 999, Some(6)).unwrap();
        assert_eq!(s.len(), 6);
        assert!(s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn lz_number_width_never_narrower_than_max() {
        let random = Random::default();
        let s = random.lz_number(0, 12345, Some(2)).unwrap();
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn lz_number_rejects_negative_bounds() {
        let random = Random::default();
        assert_eq!(
            random.lz_number(-1, 10, None),
            Err(RandError::NegativeBound { min: -1, max: 10 })
        );
    }
}
