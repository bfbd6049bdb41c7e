use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Point ceilings per category. Inactive categories are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryMaxima {
    pub skills: f64,
    pub experience: f64,
    pub projects: f64,
    pub sections: Option<f64>,
    pub writing: Option<f64>,
}

impl CategoryMaxima {
    pub fn total(&self) -> f64 {
        self.skills
            + self.experience
            + self.projects
            + self.sections.unwrap_or(0.0)
            + self.writing.unwrap_or(0.0)
    }
}

/// Which weighting scheme is the system of record for this process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringScheme {
    /// Five factors: skills 50, experience 25, projects 10, sections 10, writing 5.
    #[default]
    Standard,
    /// Three factors: skills 50, experience 30, projects 20.
    Legacy,
}

impl ScoringScheme {
    pub fn maxima(self) -> CategoryMaxima {
        match self {
            ScoringScheme::Standard => CategoryMaxima {
                skills: 50.0,
                experience: 25.0,
                projects: 10.0,
                sections: Some(10.0),
                writing: Some(5.0),
            },
            ScoringScheme::Legacy => CategoryMaxima {
                skills: 50.0,
                experience: 30.0,
                projects: 20.0,
                sections: None,
                writing: None,
            },
        }
    }
}

impl fmt::Display for ScoringScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringScheme::Standard => write!(f, "standard"),
            ScoringScheme::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for ScoringScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "five_factor" => Ok(ScoringScheme::Standard),
            "legacy" | "three_factor" => Ok(ScoringScheme::Legacy),
            other => Err(format!(
                "unknown scoring scheme '{other}' (expected 'standard' or 'legacy')"
            )),
        }
    }
}

/// Tunable constants of the fuzzy skill matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Minimum similarity ratio for a fuzzy match.
    pub threshold: f64,
    /// The substring rule applies only when both normalized skills are longer than this.
    pub min_substring_len: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: 0.85,
            min_substring_len: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoringConfig {
    pub scheme: ScoringScheme,
    pub matcher: MatcherConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_schemes_sum_to_100() {
        assert_eq!(ScoringScheme::Standard.maxima().total(), 100.0);
        assert_eq!(ScoringScheme::Legacy.maxima().total(), 100.0);
    }

    #[test]
    fn test_scheme_parses_case_insensitively() {
        assert_eq!("Legacy".parse::<ScoringScheme>(), Ok(ScoringScheme::Legacy));
        assert_eq!(" standard ".parse::<ScoringScheme>(), Ok(ScoringScheme::Standard));
        assert!("weighted".parse::<ScoringScheme>().is_err());
    }

    #[test]
    fn test_scheme_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ScoringScheme::Legacy).unwrap(),
            r#""legacy""#
        );
    }

    #[test]
    fn test_matcher_defaults() {
        let config = MatcherConfig::default();
        assert_eq!(config.threshold, 0.85);
        assert_eq!(config.min_substring_len, 3);
    }
}
