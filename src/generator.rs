//! Constrained password, passphrase and PIN generation.

use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use secrecy::SecretString;

use crate::charset::{CharClass, ClassSelection, DIGITS, SYMBOLS};
use crate::error::{InvalidRequest, PasswordError};
use crate::evaluator::evaluate_password_strength;
use crate::history::{History, HistoryEntry};
use crate::types::GeneratedPassword;
use crate::wordlist::{active_words, normalize_words};

/// Shortest password or PIN the generator will produce.
pub const MIN_GENERATED_LENGTH: usize = 4;

/// Longest password or PIN the generator will produce.
pub const MAX_GENERATED_LENGTH: usize = 1024;

fn check_length(length: usize) -> Result<(), InvalidRequest> {
    if length < MIN_GENERATED_LENGTH {
        return Err(InvalidRequest::LengthTooShort {
            length,
            min: MIN_GENERATED_LENGTH,
        });
    }
    if length > MAX_GENERATED_LENGTH {
        return Err(InvalidRequest::LengthTooLong {
            length,
            max: MAX_GENERATED_LENGTH,
        });
    }
    Ok(())
}

/// Parameters for [`PasswordGenerator::generate_password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSelection,
    /// Minimum number of characters drawn from each enabled class.
    pub min_each: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            classes: ClassSelection::default(),
            min_each: 1,
        }
    }
}

impl GenerationRequest {
    /// Verifies the request can be satisfied.
    pub fn check(&self) -> Result<(), InvalidRequest> {
        check_length(self.length)?;

        let classes = self.classes.enabled();
        if classes.is_empty() {
            return Err(InvalidRequest::NoCharClass);
        }

        let required = classes.len().saturating_mul(self.min_each);
        if self.length < required {
            return Err(InvalidRequest::LengthBelowMinimums {
                length: self.length,
                required,
            });
        }

        // Required characters are distinct within a class
        if let Some(class) = classes.into_iter().find(|c| self.min_each > c.size()) {
            return Err(InvalidRequest::MinEachExceedsAlphabet {
                class,
                min_each: self.min_each,
                available: class.size(),
            });
        }

        Ok(())
    }
}

/// Generates passwords and keeps a bounded history of what it produced.
///
/// All methods take `&self`; the random source and the history each sit
/// behind their own lock, so a generator can be shared between threads.
pub struct PasswordGenerator {
    rng: Mutex<StdRng>,
    history: Mutex<History>,
    words: Option<Vec<String>>,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a generator with a fixed seed, for reproducible output.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            history: Mutex::new(History::default()),
            words: None,
        }
    }

    /// Uses `words` for memorable passwords instead of the active word list.
    ///
    /// Words are normalized like a loaded word list: trimmed, lowercased,
    /// blanks and duplicates dropped.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words = Some(normalize_words(words));
        self
    }

    /// Generates a random password satisfying `request`.
    ///
    /// Each enabled class contributes `min_each` distinct characters; the rest
    /// is filled from the union of the enabled alphabets and the whole sequence
    /// is shuffled.
    pub fn generate_password(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPassword, PasswordError> {
        request.check()?;

        let password: String = {
            let mut rng = self.rng();
            let mut pool = Vec::new();
            let mut chars = Vec::with_capacity(request.length);

            for class in request.classes.enabled() {
                let alphabet: Vec<char> = class.alphabet().chars().collect();
                chars.extend(alphabet.choose_multiple(&mut *rng, request.min_each).copied());
                pool.extend(alphabet);
            }

            let filler = request.length - chars.len();
            chars.extend((0..filler).map(|_| pool[rng.gen_range(0..pool.len())]));
            chars.shuffle(&mut *rng);
            chars.into_iter().collect()
        };

        Ok(self.record(password))
    }

    /// Generates a passphrase of `word_count` distinct capitalized words.
    ///
    /// Optionally appends a three digit number (100-999) and then one symbol.
    pub fn generate_memorable_password(
        &self,
        word_count: usize,
        add_number: bool,
        add_symbol: bool,
    ) -> Result<GeneratedPassword, PasswordError> {
        let words = match &self.words {
            Some(words) => words.clone(),
            None => active_words(),
        };
        if word_count == 0 || word_count > words.len() {
            return Err(InvalidRequest::WordCount {
                requested: word_count,
                available: words.len(),
            }
            .into());
        }

        let password = {
            let mut rng = self.rng();
            let mut password: String = words
                .choose_multiple(&mut *rng, word_count)
                .map(|word| capitalize(word))
                .collect();

            if add_number {
                password.push_str(&rng.gen_range(100..=999).to_string());
            }
            if add_symbol {
                let symbols: Vec<char> = SYMBOLS.chars().collect();
                password.push(symbols[rng.gen_range(0..symbols.len())]);
            }
            password
        };

        Ok(self.record(password))
    }

    /// Generates a numeric PIN. Digits may repeat and lead with zero.
    pub fn generate_pin(&self, length: usize) -> Result<GeneratedPassword, PasswordError> {
        check_length(length)?;

        let pin: String = {
            let mut rng = self.rng();
            let digits: Vec<char> = DIGITS.chars().collect();
            (0..length)
                .map(|_| digits[rng.gen_range(0..digits.len())])
                .collect()
        };

        Ok(self.record(pin))
    }

    /// Recent generations in insertion order, most recent last.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries()
    }

    pub fn clear_history(&self) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn rng(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Scores `password`, appends it to the history and returns it.
    fn record(&self, password: String) -> GeneratedPassword {
        let password = SecretString::new(password.into());
        let strength = evaluate_password_strength(&password);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Generated password scored {} ({})",
            strength.score,
            strength.tier
        );

        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(HistoryEntry {
                password: password.clone(),
                strength: strength.clone(),
                generated_at: Utc::now(),
            });

        GeneratedPassword { password, strength }
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
