//! Pattern analysis section - penalizes repeated substrings.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

const PATTERN_LENGTHS: [usize; 3] = [2, 3, 4];
const REPEAT_PENALTY: i32 = 10;

/// Penalizes a password containing a repeated 2-4 character pattern.
///
/// The penalty is applied once no matter how many patterns repeat.
pub fn pattern_analysis_section(password: &SecretString) -> SectionScore {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if has_repeated_pattern(&chars) {
        return SectionScore::with_feedback(-REPEAT_PENALTY, "Avoid repeated patterns");
    }
    SectionScore::default()
}

/// True when some window of 2, 3 or 4 chars occurs again later without overlapping itself.
fn has_repeated_pattern(chars: &[char]) -> bool {
    PATTERN_LENGTHS.iter().any(|&size| {
        if chars.len() < size * 2 {
            return false;
        }
        (0..=chars.len() - size * 2).any(|start| {
            let pattern = &chars[start..start + size];
            chars[start + size..]
                .windows(size)
                .any(|window| window == pattern)
        })
    })
}
