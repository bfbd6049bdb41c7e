use serde::{Deserialize, Serialize};

/// Per-category decomposition of the total score, each rounded to two decimals.
///
/// `section_score` and `writing_score` are `None` when the active scheme does
/// not include those components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_score: f64,
    pub experience_score: f64,
    pub project_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writing_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0 – 100, rounded to two decimals.
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    /// Required skills present on the resume, in the job record's spelling.
    pub matched_skills: Vec<String>,
    /// Required skills absent from the resume, in the job record's spelling.
    pub missing_skills: Vec<String>,
    pub summary: String,
}
