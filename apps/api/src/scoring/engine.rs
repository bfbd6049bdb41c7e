//! Aggregator: runs every active sub-scorer and assembles the `MatchResult`.

use tracing::debug;

use crate::models::job::JobRecord;
use crate::models::resume::ResumeRecord;
use crate::models::score::{MatchResult, ScoreBreakdown};
use crate::models::weights::WeightMap;
use crate::scoring::config::{CategoryMaxima, ScoringConfig, ScoringScheme};
use crate::scoring::experience::score_experience;
use crate::scoring::matcher::SkillMatcher;
use crate::scoring::projects::score_projects;
use crate::scoring::round2;
use crate::scoring::sections::{score_sections, REQUIRED_SECTIONS};
use crate::scoring::skills::score_skills;
use crate::scoring::writing::score_writing;

/// The scorer seam. Handlers hold an `Arc<dyn FitScorer>` so the scoring
/// backend can be swapped without touching extraction or routing.
pub trait FitScorer: Send + Sync {
    /// Total over well-formed records: every edge case is absorbed into policy.
    fn score(
        &self,
        resume: &ResumeRecord,
        job: &JobRecord,
        weights: Option<&WeightMap>,
    ) -> MatchResult;

    fn scheme(&self) -> ScoringScheme;
}

/// Deterministic rule-based scorer.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    scheme: ScoringScheme,
    maxima: CategoryMaxima,
    matcher: SkillMatcher,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            scheme: config.scheme,
            maxima: config.scheme.maxima(),
            matcher: SkillMatcher::new(config.matcher),
        }
    }
}

impl FitScorer for ScoringEngine {
    fn score(
        &self,
        resume: &ResumeRecord,
        job: &JobRecord,
        weights: Option<&WeightMap>,
    ) -> MatchResult {
        let default_weights = WeightMap::default();
        let weights = weights.unwrap_or(&default_weights);
        let maxima = &self.maxima;

        let skills = score_skills(job, &resume.skills, weights, &self.matcher, maxima.skills);
        let experience = score_experience(
            job.min_experience_years,
            resume.total_experience_years,
            maxima.experience,
        );
        let projects = score_projects(resume.projects.len(), maxima.projects);
        let sections = maxima.sections.map(|max| score_sections(resume, max));
        let writing = maxima
            .writing
            .map(|max| score_writing(resume.writing_issues.len(), max));

        let raw_total = skills.score
            + experience
            + projects
            + sections.as_ref().map_or(0.0, |s| s.score)
            + writing.unwrap_or(0.0);

        let breakdown = ScoreBreakdown {
            skill_score: round2(skills.score),
            experience_score: round2(experience),
            project_score: round2(projects),
            section_score: sections.as_ref().map(|s| round2(s.score)),
            writing_score: writing.map(round2),
        };
        let total_score = round2(raw_total);

        debug!(
            scheme = %self.scheme,
            total_score,
            skill = breakdown.skill_score,
            experience = breakdown.experience_score,
            project = breakdown.project_score,
            "resume scored"
        );

        let summary = build_summary(&SummaryFacts {
            total_score,
            breakdown: &breakdown,
            maxima,
            matched: skills.matched.len(),
            required: skills.matched.len() + skills.missing.len(),
            actual_years: resume.total_experience_years,
            required_years: job.min_experience_years,
            projects: resume.projects.len(),
            sections_found: sections.as_ref().map(|s| s.found.len()),
            issues: resume.writing_issues.len(),
        });

        MatchResult {
            total_score,
            breakdown,
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            summary,
        }
    }

    fn scheme(&self) -> ScoringScheme {
        self.scheme
    }
}

struct SummaryFacts<'a> {
    total_score: f64,
    breakdown: &'a ScoreBreakdown,
    maxima: &'a CategoryMaxima,
    matched: usize,
    required: usize,
    actual_years: f64,
    required_years: f64,
    projects: usize,
    sections_found: Option<usize>,
    issues: usize,
}

/// Renders the one-line, deterministic explanation of a score.
fn build_summary(facts: &SummaryFacts<'_>) -> String {
    let b = facts.breakdown;
    let m = facts.maxima;

    let experience_detail = if facts.required_years > 0.0 {
        format!(
            "{} of {} years required",
            facts.actual_years, facts.required_years
        )
    } else {
        format!("{} years, no minimum", facts.actual_years)
    };

    let mut parts = vec![
        format!(
            "Skills {:.2}/{} ({} of {} required matched)",
            b.skill_score, m.skills, facts.matched, facts.required
        ),
        format!(
            "experience {:.2}/{} ({experience_detail})",
            b.experience_score, m.experience
        ),
        format!(
            "projects {:.2}/{} ({} listed)",
            b.project_score, m.projects, facts.projects
        ),
    ];

    if let (Some(score), Some(max), Some(found)) = (b.section_score, m.sections, facts.sections_found)
    {
        parts.push(format!(
            "sections {score:.2}/{max} ({found} of {} found)",
            REQUIRED_SECTIONS.len()
        ));
    }
    if let (Some(score), Some(max)) = (b.writing_score, m.writing) {
        let noun = if facts.issues == 1 { "issue" } else { "issues" };
        parts.push(format!(
            "writing {score:.2}/{max} ({} {noun})",
            facts.issues
        ));
    }

    format!(
        "{}. Total {:.2}/{}.",
        parts.join("; "),
        facts.total_score,
        m.total()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;
    use crate::scoring::config::MatcherConfig;
    use serde_json::json;

    fn make_resume(skills: &[&str], years: f64, projects: usize) -> ResumeRecord {
        ResumeRecord {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: vec![ExperienceEntry {
                role: Some("Backend Engineer".to_string()),
                years,
            }],
            total_experience_years: years,
            projects: (0..projects).map(|i| format!("project-{i}")).collect(),
            education: vec!["BSc Computer Science".to_string()],
            sections: vec!["Summary".to_string()],
            writing_issues: vec![],
        }
    }

    fn make_job(required: &[&str], min_years: f64) -> JobRecord {
        JobRecord {
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: vec!["Kafka".to_string()],
            min_experience_years: min_years,
            role_responsibilities: vec![],
        }
    }

    fn standard() -> ScoringEngine {
        ScoringEngine::new(ScoringConfig::default())
    }

    fn legacy() -> ScoringEngine {
        ScoringEngine::new(ScoringConfig {
            scheme: ScoringScheme::Legacy,
            matcher: MatcherConfig::default(),
        })
    }

    #[test]
    fn test_perfect_candidate_scores_100() {
        let result = standard().score(
            &make_resume(&["Rust", "PostgreSQL"], 6.0, 3),
            &make_job(&["rust", "postgres"], 5.0),
            None,
        );
        assert_eq!(result.total_score, 100.0);
        assert_eq!(result.breakdown.section_score, Some(10.0));
        assert_eq!(result.breakdown.writing_score, Some(5.0));
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_worked_example_standard() {
        let mut resume = make_resume(&["Python", "SQL"], 4.6, 1);
        resume.writing_issues = vec!["passive voice".into(), "typo in header".into()];
        let result = standard().score(&resume, &make_job(&["Python", "Go"], 5.0), None);

        assert_eq!(result.matched_skills, vec!["Python"]);
        assert_eq!(result.missing_skills, vec!["Go"]);
        assert_eq!(result.breakdown.skill_score, 25.0);
        assert_eq!(result.breakdown.experience_score, 23.33);
        assert_eq!(result.breakdown.project_score, 5.0);
        assert_eq!(result.breakdown.section_score, Some(10.0));
        assert_eq!(result.breakdown.writing_score, Some(3.0));
        // 25 + 23.333.. + 5 + 10 + 3
        assert_eq!(result.total_score, 66.33);
    }

    #[test]
    fn test_legacy_scheme_has_three_components() {
        let result = legacy().score(
            &make_resume(&["Python"], 2.0, 1),
            &make_job(&["Python", "Go"], 4.0),
            None,
        );
        assert_eq!(result.breakdown.skill_score, 25.0);
        assert_eq!(result.breakdown.experience_score, 15.0);
        assert_eq!(result.breakdown.project_score, 10.0);
        assert_eq!(result.breakdown.section_score, None);
        assert_eq!(result.breakdown.writing_score, None);
        assert_eq!(result.total_score, 50.0);
        assert!(!result.summary.contains("sections"));
        assert_eq!(legacy().scheme(), ScoringScheme::Legacy);
    }

    #[test]
    fn test_empty_inputs_stay_in_bounds() {
        let result = standard().score(&ResumeRecord::default(), &JobRecord::default(), None);
        // skills and experience are vacuously satisfied, writing has no issues
        assert_eq!(result.breakdown.skill_score, 50.0);
        assert_eq!(result.breakdown.experience_score, 25.0);
        assert_eq!(result.breakdown.project_score, 0.0);
        assert_eq!(result.breakdown.section_score, Some(0.0));
        assert_eq!(result.total_score, 80.0);
    }

    #[test]
    fn test_zero_minimum_ignores_actual_experience() {
        for years in [0.0, 0.3, 25.0] {
            let result = standard().score(
                &make_resume(&[], years, 0),
                &make_job(&["Go"], 0.0),
                None,
            );
            assert_eq!(result.breakdown.experience_score, 25.0);
        }
    }

    #[test]
    fn test_sub_scores_within_maxima() {
        let resumes = [
            make_resume(&[], 0.0, 0),
            make_resume(&["go", "rust", "react"], 1.2, 1),
            make_resume(&["javascript"], 30.0, 9),
        ];
        let jobs = [
            make_job(&[], 0.0),
            make_job(&["Go", "JS"], 2.0),
            make_job(&["C++", "Haskell", "React.js"], 10.0),
        ];
        for engine in [standard(), legacy()] {
            let m = engine.scheme().maxima();
            for resume in &resumes {
                for job in &jobs {
                    let r = engine.score(resume, job, None);
                    let b = &r.breakdown;
                    assert!((0.0..=100.0).contains(&r.total_score));
                    assert!((0.0..=m.skills).contains(&b.skill_score));
                    assert!((0.0..=m.experience).contains(&b.experience_score));
                    assert!((0.0..=m.projects).contains(&b.project_score));
                    if let (Some(s), Some(max)) = (b.section_score, m.sections) {
                        assert!((0.0..=max).contains(&s));
                    }
                    if let (Some(s), Some(max)) = (b.writing_score, m.writing) {
                        assert!((0.0..=max).contains(&s));
                    }
                }
            }
        }
    }

    #[test]
    fn test_weights_are_applied() {
        let weights = WeightMap::from_value(&json!({"go": 3})).unwrap();
        let result = legacy().score(
            &make_resume(&["Go"], 5.0, 2),
            &make_job(&["Python", "Go"], 5.0),
            Some(&weights),
        );
        assert_eq!(result.breakdown.skill_score, 37.5);
    }

    #[test]
    fn test_summary_is_deterministic_and_informative() {
        let resume = make_resume(&["Python", "SQL"], 4.6, 1);
        let job = make_job(&["Python", "Go"], 5.0);
        let first = standard().score(&resume, &job, None).summary;
        let second = standard().score(&resume, &job, None).summary;
        assert_eq!(first, second);
        assert_eq!(
            first,
            "Skills 25.00/50 (1 of 2 required matched); \
             experience 23.33/25 (4.6 of 5 years required); \
             projects 5.00/10 (1 listed); \
             sections 10.00/10 (5 of 5 found); \
             writing 5.00/5 (0 issues). Total 68.33/100."
        );
    }
}
