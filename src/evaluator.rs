//! Password strength evaluator - main scoring logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    Section, SectionScore, character_variety_section, distribution_section, length_section,
    pattern_analysis_section,
};
use crate::types::{StrengthResult, StrengthTier};

/// Sections in evaluation order; feedback is reported in the same order.
const SECTIONS: [(&str, Section); 4] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("distribution", distribution_section),
    ("pattern", pattern_analysis_section),
];

#[cfg(feature = "async")]
const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Running total while sections are applied.
#[derive(Default)]
struct Scorecard {
    score: i32,
    feedback: Vec<String>,
}

impl Scorecard {
    fn apply(&mut self, section: SectionScore) {
        self.score += section.points;
        self.feedback.extend(section.feedback);
    }

    fn finish(self) -> StrengthResult {
        let score = self.score.clamp(0, 100) as u8;
        StrengthResult {
            score,
            tier: StrengthTier::from_score(score),
            feedback: self.feedback,
        }
    }
}

/// Scores a password on a 0-100 scale and classifies it.
///
/// Pure and deterministic: the same password always yields the same result.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthResult {
    let mut card = Scorecard::default();
    for (_, section_fn) in SECTIONS {
        card.apply(section_fn(password));
    }
    card.finish()
}

/// Like [`evaluate_password_strength`], but checks `token` before each section.
///
/// Returns `None` if the evaluation was cancelled.
#[cfg(feature = "async")]
pub fn evaluate_password_strength_cancellable(
    password: &SecretString,
    token: &CancellationToken,
) -> Option<StrengthResult> {
    let mut card = Scorecard::default();
    for (_section_name, section_fn) in SECTIONS {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Evaluation cancelled before section: {}", _section_name);
            return None;
        }
        card.apply(section_fn(password));
    }
    Some(card.finish())
}

/// Async version that debounces, then sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the evaluation completes.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;
    let Some(result) = evaluate_password_strength_cancellable(&password, &token) else {
        return;
    };

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn evaluate(pwd: &str) -> StrengthResult {
        evaluate_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_evaluate_well_distributed_password() {
        let result = evaluate("aB1!cD2@eF3#");
        assert_eq!(result.score, 90);
        assert_eq!(result.tier, StrengthTier::VeryStrong);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_long_complex_password() {
        let result = evaluate("P@ssw0rd!2023Complex");
        assert_eq!(result.score, 95);
        assert_eq!(result.tier, StrengthTier::VeryStrong);
    }

    #[test]
    fn test_evaluate_weak_short_password() {
        let result = evaluate("abc");
        // 6 for length, 10 for one class
        assert_eq!(result.score, 16);
        assert_eq!(result.tier, StrengthTier::VeryWeak);
        assert_eq!(result.feedback.len(), 2);
        assert!(result.feedback[0].contains("too short"));
        assert_eq!(result.feedback[1], "Add uppercase letters, digits, symbols");
    }

    #[test]
    fn test_evaluate_empty_password() {
        let result = evaluate("");
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, StrengthTier::VeryWeak);
        assert!(!result.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_score_clamped_at_zero() {
        // 8 for length, no known class, -10 for the repeat
        let result = evaluate("~~~~");
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, StrengthTier::VeryWeak);
        assert!(result.feedback.iter().any(|f| f.contains("repeated patterns")));
    }

    #[test]
    fn test_evaluate_medium_password() {
        let result = evaluate("password123");
        // 25 length, 20 variety, no distribution bonus, no repeats
        assert_eq!(result.score, 45);
        assert_eq!(result.tier, StrengthTier::Medium);
    }

    #[test]
    fn test_evaluate_exactly_80_is_strong() {
        // 40 length + 40 variety + 10 distribution - 10 for "xy" repeating
        let result = evaluate("aB1!xyzwxyqrst");
        assert_eq!(result.score, 80);
        assert_eq!(result.tier, StrengthTier::Strong);
    }

    #[test]
    fn test_repeated_pattern_scores_lower() {
        let repeated = evaluate("abcabc123");
        let plain = evaluate("abcdef123");
        assert!(repeated.score < plain.score);
        assert_eq!(plain.score - repeated.score, 10);
        assert!(
            repeated
                .feedback
                .iter()
                .any(|f| f.contains("repeated patterns"))
        );
        assert!(!plain.feedback.iter().any(|f| f.contains("repeated patterns")));
    }

    #[test]
    fn test_score_monotonic_in_length() {
        let short = evaluate("aB1!cD2@");
        let long = evaluate("aB1!cD2@eF3#gH");
        assert_eq!(short.score, 75);
        assert_eq!(long.score, 95);
        assert!(long.score >= short.score);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let pwd = SecretString::new("Tr0ub4dor&3".to_string().into());
        assert_eq!(
            evaluate_password_strength(&pwd),
            evaluate(pwd.expose_secret())
        );
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        let test_passwords = vec!["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"];

        for pwd_str in test_passwords {
            let result = evaluate(pwd_str);
            assert!(
                result.score <= 100,
                "Score {} out of bounds for password '{}'",
                result.score,
                pwd_str
            );
            assert_eq!(result.tier, StrengthTier::from_score(result.score));
        }
    }
}
