//! Result types shared by the evaluator and the generator.

use std::fmt;

use secrecy::SecretString;
use serde::Serialize;

/// Qualitative strength label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Maps a clamped score to its tier. Thresholds are strict: 80 is `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s > 80 => StrengthTier::VeryStrong,
            s if s > 60 => StrengthTier::Strong,
            s if s > 40 => StrengthTier::Medium,
            s if s > 20 => StrengthTier::Weak,
            _ => StrengthTier::VeryWeak,
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthTier::VeryWeak => "Very weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very strong",
        };
        f.write_str(label)
    }
}

/// Outcome of scoring a password: a 0-100 score, its tier and advisory feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthResult {
    pub score: u8,
    pub tier: StrengthTier,
    pub feedback: Vec<String>,
}

/// A freshly generated password together with its strength.
#[derive(Debug, Clone)]
pub struct GeneratedPassword {
    pub password: SecretString,
    pub strength: StrengthResult,
}
