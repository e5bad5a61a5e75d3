use crate::error::RandError;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

const LOWERS: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!;#$%&()*+,-./:;<=>?@[]^_{|}~";

/// Substrings that immediately mark a password as a common mistake.
const COMMON_WORDS: &[&str] = &[
    "pass", "word", "admin", "secret", "my", "qwe", "senha", "mudar",
];

/// How many re-draws [`PasswordGenerator::generate`] attempts before
/// accepting an adjacent-similar character. Keeps degenerate single-character
/// pools from spinning forever.
const MAX_REDRAWS: usize = 100;

/// Configures a [`PasswordGenerator`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct PasswordSettings {
    #[builder(default = true)]
    pub lowercase: bool,
    #[builder(default = true)]
    pub uppercase: bool,
    #[builder(default = true)]
    pub numbers: bool,
    #[builder(default = true)]
    pub symbols: bool,
    /// The password must start with a letter.
    #[builder(default = false)]
    pub begin_with_letter: bool,
    /// Reject characters whose case-folded code point is within one of the
    /// previous character (no `aa`, `ab`, `aB`).
    #[builder(default = true)]
    pub no_adjacent_similar: bool,
    /// Special-character pool; spaces and duplicates are stripped on
    /// construction.
    #[builder(default = SYMBOLS.to_string())]
    pub symbol_pool: String,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Random password generator with configurable character classes.
pub struct PasswordGenerator {
    settings: PasswordSettings,
}

impl PasswordGenerator {
    pub fn new(mut settings: PasswordSettings) -> Self {
        settings.symbol_pool = sanitize_symbols(&settings.symbol_pool);
        if settings.symbol_pool.is_empty() {
            settings.symbol_pool = SYMBOLS.to_string();
        }
        Self { settings }
    }

    /// Generates a password of `len` characters.
    ///
    /// Fails when every character class is disabled, or when
    /// `begin_with_letter` is set with both letter classes disabled.
    pub fn generate(&self, len: usize) -> Result<String, RandError> {
        let s = &self.settings;

        if !s.lowercase && !s.uppercase && !s.numbers && !s.symbols {
            return Err(RandError::EmptyPool);
        }
        if s.begin_with_letter && !s.lowercase && !s.uppercase {
            return Err(RandError::NoLetterPool);
        }

        let letters = self.active_letters();
        let chars = self.active_chars();

        let mut out = String::with_capacity(len);
        let mut last: Option<char> = None;
        for at in 0..len {
            let source = if at == 0 && s.begin_with_letter {
                &letters
            } else {
                &chars
            };

            let mut pick = source[fastrand::usize(..source.len())];
            if s.no_adjacent_similar {
                let mut redraws = 0;
                while is_neighbor_or_equal(pick, last) && redraws < MAX_REDRAWS {
                    pick = source[fastrand::usize(..source.len())];
                    redraws += 1;
                }
            }

            last = Some(pick);
            out.push(pick);
        }

        Ok(out)
    }

    fn active_letters(&self) -> Vec<char> {
        let mut letters = String::new();
        if self.settings.lowercase {
            letters.push_str(LOWERS);
        }
        if self.settings.uppercase {
            letters.push_str(UPPERS);
        }
        letters.chars().collect()
    }

    fn active_chars(&self) -> Vec<char> {
        let mut chars = String::new();
        if self.settings.lowercase {
            chars.push_str(LOWERS);
        }
        if self.settings.uppercase {
            chars.push_str(UPPERS);
        }
        if self.settings.numbers {
            chars.push_str(NUMBERS);
        }
        if self.settings.symbols {
            chars.push_str(&self.settings.symbol_pool);
        }
        chars.chars().collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(PasswordSettings::default())
    }
}

fn sanitize_symbols(pool: &str) -> String {
    let mut out = String::new();
    for c in pool.chars() {
        if c != ' ' && !out.contains(c) {
            out.push(c);
        }
    }
    out
}

fn is_neighbor_or_equal(a: char, last: Option<char>) -> bool {
    let Some(b) = last else {
        return false;
    };
    let delta = a.to_ascii_lowercase() as i32 - b.to_ascii_lowercase() as i32;
    (-1..=1).contains(&delta)
}

/// Password strength buckets, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Good,
    Strong,
}

/// Scores a password.
///
/// Additive points for length and for each character class present; if that
/// alone reaches the top bucket, penalties are skipped. Otherwise repeated
/// adjacent characters, ascending digit runs and common words each subtract,
/// and the result is clamped to the bucket range.
pub fn strength(password: &str) -> Strength {
    let mut score: i32 = 0;

    let len = password.chars().count();
    if len >= 14 {
        score += 4;
    } else if len > 8 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 4;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 4;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 4;
    }
    if password.chars().any(|c| !c.is_alphanumeric() && c != '_') {
        score += 4;
    }

    if score.div_euclid(5) >= 4 {
        return Strength::Strong;
    }

    let chars: Vec<char> = password.chars().collect();
    if chars.windows(2).any(|w| w[0] == w[1]) {
        score -= 4;
    }
    if chars
        .windows(2)
        .any(|w| w[0].is_ascii_digit() && w[1] as u32 == w[0] as u32 + 1 && w[1].is_ascii_digit())
    {
        score -= 4;
    }
    if COMMON_WORDS.iter().any(|word| password.contains(word)) {
        score -= 4;
    }

    match score.div_euclid(5).clamp(0, 4) {
        0 => Strength::VeryWeak,
        1 => Strength::Weak,
        2 => Strength::Medium,
        3 => Strength::Good,
        _ => Strength::Strong,
    }
}
