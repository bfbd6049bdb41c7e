use serde::{Deserialize, Serialize};

use super::{check_skills, check_years, RecordError};

/// One role held by the candidate, as extracted from the resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub years: f64,
}

/// Typed resume entities produced by the extraction step.
///
/// `name` and `email` are informational only. `total_experience_years` is
/// expected to be filtered to the target role upstream when a role hint exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub total_experience_years: f64,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    /// Section headers detected in the document, verbatim.
    #[serde(default)]
    pub sections: Vec<String>,
    /// Free-text writing problems reported by the extractor.
    #[serde(default)]
    pub writing_issues: Vec<String>,
}

impl ResumeRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        check_years("total_experience_years", self.total_experience_years)?;
        for entry in &self.experience {
            check_years("experience.years", entry.years)?;
        }
        check_skills("skills", &self.skills)
    }
}
