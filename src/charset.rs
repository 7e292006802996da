//! Character classes and their literal alphabets.
//!
//! The alphabets are plain constant tables so a different locale or symbol set
//! can be swapped in without touching the generator or the evaluator.

use std::fmt;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four disjoint alphabets used for composition and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// All classes, in the order checks and feedback report them.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Number of distinct characters in the class alphabet.
    pub fn size(self) -> usize {
        self.alphabet().chars().count()
    }

    /// Returns the class `c` belongs to, or `None` for characters outside every alphabet.
    pub fn of(c: char) -> Option<CharClass> {
        CharClass::ALL
            .into_iter()
            .find(|class| class.alphabet().contains(c))
    }

    /// Plural label used in feedback ("lowercase letters", "digits", ...).
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase letters",
            CharClass::Uppercase => "uppercase letters",
            CharClass::Digit => "digits",
            CharClass::Symbol => "symbols",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Per-class occurrence counts, indexed in `CharClass::ALL` order.
pub fn class_counts(password: &str) -> [usize; 4] {
    let mut counts = [0; 4];
    for class in password.chars().filter_map(CharClass::of) {
        counts[class as usize] += 1;
    }
    counts
}

/// Which character classes a generated password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSelection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for ClassSelection {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl ClassSelection {
    /// Enabled classes in `CharClass::ALL` order.
    pub fn enabled(&self) -> Vec<CharClass> {
        let flags = [self.lowercase, self.uppercase, self.digits, self.symbols];
        CharClass::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(class, on)| on.then_some(class))
            .collect()
    }
}
