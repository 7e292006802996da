//! Character variety section - 10 points per character class present.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;
use crate::charset::{CharClass, class_counts};

/// Scores how many of the four character classes the password uses.
///
/// When any class is absent the feedback names exactly the missing ones.
pub fn character_variety_section(password: &SecretString) -> SectionScore {
    let counts = class_counts(password.expose_secret());

    let missing: Vec<_> = CharClass::ALL
        .into_iter()
        .zip(counts)
        .filter(|&(_, count)| count == 0)
        .map(|(class, _)| class.label())
        .collect();

    let points = ((CharClass::ALL.len() - missing.len()) * 10) as i32;
    if !missing.is_empty() {
        return SectionScore::with_feedback(points, format!("Add {}", missing.join(", ")));
    }
    SectionScore::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(pwd: &str) -> SectionScore {
        character_variety_section(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = score("lowercase123!");
        assert_eq!(result.points, 30);
        assert_eq!(result.feedback, Some("Add uppercase letters".to_string()));
    }

    #[test]
    fn test_variety_section_lists_every_missing_class() {
        let result = score("UPPERCASE");
        assert_eq!(result.points, 10);
        assert_eq!(
            result.feedback,
            Some("Add lowercase letters, digits, symbols".to_string())
        );
    }

    #[test]
    fn test_variety_section_ignores_unknown_symbols() {
        // '~' and ' ' are not in the symbol alphabet
        let result = score("NoSpecial123 ~");
        assert_eq!(result.points, 30);
        assert_eq!(result.feedback, Some("Add symbols".to_string()));
    }

    #[test]
    fn test_variety_section_all_categories() {
        let result = score("HasAll123!@#");
        assert_eq!(result, SectionScore::new(40));
    }

    #[test]
    fn test_variety_section_empty() {
        assert_eq!(score("").points, 0);
    }
}
