//! Distribution section - rewards several characters from every class.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;
use super::length::MIN_LENGTH;
use crate::charset::class_counts;

/// Scores how evenly the password spreads over the four classes.
///
/// Only passwords of at least 8 characters are considered: +15 when every
/// class occurs twice or more, +10 when every class occurs at least once.
pub fn distribution_section(password: &SecretString) -> SectionScore {
    let pwd = password.expose_secret();
    if pwd.chars().count() < MIN_LENGTH {
        return SectionScore::default();
    }

    let counts = class_counts(pwd);
    if counts.iter().all(|&c| c >= 2) {
        SectionScore::new(15)
    } else if counts.iter().all(|&c| c >= 1) {
        SectionScore::with_feedback(10, "Add more characters of each type for better variety")
    } else {
        SectionScore::default()
    }
}
