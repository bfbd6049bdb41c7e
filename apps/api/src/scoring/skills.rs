use tracing::debug;

use crate::models::job::JobRecord;
use crate::models::weights::WeightMap;
use crate::scoring::matcher::SkillMatcher;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillScore {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Weighted share of required skills present on the resume, scaled to `max_points`.
///
/// - No required skills: full marks, both lists empty.
/// - Required skills whose weights all resolve to zero: 0.
/// - Otherwise `max_points × earned_weight / possible_weight`.
pub fn score_skills(
    job: &JobRecord,
    resume_skills: &[String],
    weights: &WeightMap,
    matcher: &SkillMatcher,
    max_points: f64,
) -> SkillScore {
    let required = job.distinct_required_skills();
    if required.is_empty() {
        return SkillScore {
            score: max_points,
            matched: vec![],
            missing: vec![],
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut possible_weight = 0.0_f64;
    let mut earned_weight = 0.0_f64;

    for skill in required {
        let weight = weights.weight_for(skill);
        possible_weight += weight;

        if resume_skills.iter().any(|have| matcher.matches(skill, have)) {
            earned_weight += weight;
            matched.push(skill.to_string());
        } else {
            missing.push(skill.to_string());
        }
    }

    let score = if possible_weight > 0.0 {
        (max_points * earned_weight / possible_weight).clamp(0.0, max_points)
    } else {
        0.0
    };

    debug!(
        earned_weight,
        possible_weight,
        matched = matched.len(),
        missing = missing.len(),
        "skill sub-score computed"
    );

    SkillScore {
        score,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(required: &[&str]) -> JobRecord {
        JobRecord {
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn score(job: &JobRecord, resume: &[&str], weights: &WeightMap) -> SkillScore {
        score_skills(job, &skills(resume), weights, &SkillMatcher::default(), 50.0)
    }

    #[test]
    fn test_half_of_unweighted_skills_scores_25() {
        let result = score(&job(&["Python", "Go"]), &["Python", "SQL"], &WeightMap::default());
        assert_eq!(result.matched, vec!["Python"]);
        assert_eq!(result.missing, vec!["Go"]);
        assert!((result.score - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_required_skills_is_full_marks() {
        let result = score(&job(&[]), &[], &WeightMap::default());
        assert_eq!(result.score, 50.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_lists_keep_job_spelling() {
        let result = score(&job(&["React.js", "Golang"]), &["react", "GO"], &WeightMap::default());
        assert_eq!(result.matched, vec!["React.js", "Golang"]);
        assert!(result.missing.is_empty());
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_weights_shift_the_share() {
        let weights = WeightMap::from_value(&json!({"python": 3.0})).unwrap();
        let result = score(&job(&["Python", "Go"]), &["Python"], &weights);
        // 3 of 4 possible weight
        assert!((result.score - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_weights_scores_zero() {
        let weights = WeightMap::from_value(&json!({"python": 0, "go": 0})).unwrap();
        let result = score(&job(&["Python", "Go"]), &["Python", "Go"], &weights);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.matched.len(), 2);
    }

    #[test]
    fn test_unknown_weight_keys_are_ignored() {
        let weights = WeightMap::from_value(&json!({"cobol": 10.0})).unwrap();
        let result = score(&job(&["Python", "Go"]), &["Python"], &weights);
        assert!((result.score - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_raising_matched_weight_never_lowers_score() {
        let required = job(&["Python", "Go", "SQL"]);
        let mut last = 0.0;
        for w in [0.0, 0.5, 1.0, 2.0, 10.0] {
            let weights = WeightMap::from_value(&json!({ "python": w })).unwrap();
            let result = score(&required, &["Python"], &weights);
            assert!(result.score >= last, "weight {w}: {} < {last}", result.score);
            last = result.score;
        }
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let required = job(&["Rust", "Kubernetes", "Kafka", "TS", "Rust"]);
        let result = score(&required, &["k8s", "typescript"], &WeightMap::default());

        let mut union: Vec<String> = result.matched.clone();
        union.extend(result.missing.clone());
        union.sort();
        assert_eq!(union, vec!["Kafka", "Kubernetes", "Rust", "TS"]);
        assert!(result.matched.iter().all(|m| !result.missing.contains(m)));
    }
}
