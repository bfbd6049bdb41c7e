pub mod job;
pub mod resume;
pub mod score;
pub mod weights;

use thiserror::Error;

/// A structured record failed boundary validation and must not reach the scorer.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("{field} must be a finite, non-negative number of years (got {value})")]
    InvalidYears { field: &'static str, value: f64 },

    #[error("{field} entry is {len} characters long; the limit is {max}", max = MAX_SKILL_CHARS)]
    SkillTooLong { field: &'static str, len: usize },
}

/// Longest skill string accepted from extraction output or client JSON.
pub const MAX_SKILL_CHARS: usize = 100;

/// Years fields arrive from model output or client JSON; reject NaN, infinities and negatives.
pub(crate) fn check_years(field: &'static str, value: f64) -> Result<(), RecordError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RecordError::InvalidYears { field, value })
    }
}

/// Skill lists feed the fuzzy matcher, whose cost grows with string length.
pub(crate) fn check_skills(field: &'static str, skills: &[String]) -> Result<(), RecordError> {
    match skills
        .iter()
        .map(|s| s.chars().count())
        .find(|&len| len > MAX_SKILL_CHARS)
    {
        Some(len) => Err(RecordError::SkillTooLong { field, len }),
        None => Ok(()),
    }
}
