//! Password scoring sections
//!
//! Each section scores one aspect of password strength. The evaluator runs
//! them in order and sums their points.

mod distribution;
mod length;
mod pattern;
mod variety;

pub use distribution::distribution_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

/// Points a section contributes (negative for penalties) and the advisory it raises, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionScore {
    pub points: i32,
    pub feedback: Option<String>,
}

impl SectionScore {
    pub fn new(points: i32) -> Self {
        Self {
            points,
            feedback: None,
        }
    }

    pub fn with_feedback(points: i32, feedback: impl Into<String>) -> Self {
        Self {
            points,
            feedback: Some(feedback.into()),
        }
    }
}

/// Signature shared by all scoring sections.
pub type Section = fn(&secrecy::SecretString) -> SectionScore;
