//! Error types for generation and validation.

use thiserror::Error;

use crate::charset::CharClass;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),
    #[error("Password must {0}")]
    ValidationFailure(#[from] Requirement),
}

/// A generation request whose preconditions cannot be met.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("length {length} is below the minimum of {min}")]
    LengthTooShort { length: usize, min: usize },
    #[error("length {length} is above the maximum of {max}")]
    LengthTooLong { length: usize, max: usize },
    #[error("at least one character class must be selected")]
    NoCharClass,
    #[error("length {length} is too short for the per-class minimums, need at least {required}")]
    LengthBelowMinimums { length: usize, required: usize },
    #[error("cannot pick {min_each} distinct {class} characters from an alphabet of {available}")]
    MinEachExceedsAlphabet {
        class: CharClass,
        min_each: usize,
        available: usize,
    },
    #[error("word count {requested} must be between 1 and {available}")]
    WordCount { requested: usize, available: usize },
}

/// The first requirement a validated password failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    #[error("be at least {0} characters long")]
    MinLength(usize),
    #[error("contain a lowercase letter")]
    Lowercase,
    #[error("contain an uppercase letter")]
    Uppercase,
    #[error("contain a digit")]
    Digit,
    #[error("contain a symbol")]
    Symbol,
}

impl From<CharClass> for Requirement {
    fn from(class: CharClass) -> Self {
        match class {
            CharClass::Lowercase => Requirement::Lowercase,
            CharClass::Uppercase => Requirement::Uppercase,
            CharClass::Digit => Requirement::Digit,
            CharClass::Symbol => Requirement::Symbol,
        }
    }
}
