use serde::{Deserialize, Serialize};

use super::{check_skills, check_years, RecordError};

/// Typed job-description requirements produced by the extraction step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Informational; not scored.
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    /// 0 means no minimum.
    #[serde(default)]
    pub min_experience_years: f64,
    #[serde(default)]
    pub role_responsibilities: Vec<String>,
}

impl JobRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        check_years("min_experience_years", self.min_experience_years)?;
        check_skills("required_skills", &self.required_skills)?;
        check_skills("preferred_skills", &self.preferred_skills)
    }

    /// Required skills with exact duplicates removed, first spelling kept, order preserved.
    pub fn distinct_required_skills(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.required_skills.len());
        for skill in &self.required_skills {
            if !seen.contains(&skill.as_str()) {
                seen.push(skill);
            }
        }
        seen
    }
}
