//! Length section - up to 40 points for password length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

pub(crate) const MIN_LENGTH: usize = 8;

/// Scores password length.
///
/// Below 8 characters each character is worth 2 points. From there the score
/// steps up at 10, 12 and 14 characters, capping at 40.
pub fn length_section(password: &SecretString) -> SectionScore {
    let len = password.expose_secret().chars().count();
    match len {
        l if l < MIN_LENGTH => SectionScore::with_feedback(
            (l * 2) as i32,
            format!("Password is too short, use at least {} characters", MIN_LENGTH),
        ),
        l if l < 10 => SectionScore::with_feedback(20, "Consider making the password longer"),
        l if l < 12 => SectionScore::with_feedback(25, "Password length is fairly good"),
        l if l < 14 => SectionScore::new(35),
        _ => SectionScore::new(40),
    }
}
