use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::scoring::normalizer::normalize_skill;

/// Weight applied to any required skill the map does not mention.
pub const DEFAULT_SKILL_WEIGHT: f64 = 1.0;

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("weights must be valid JSON: {0}")]
    Malformed(String),

    #[error("weights must be a JSON object mapping skill name to number")]
    NotAnObject,

    #[error("weight for '{0}' must be a number")]
    NotANumber(String),

    #[error("weight for '{skill}' must be a finite, non-negative number (got {value})")]
    OutOfRange { skill: String, value: f64 },
}

/// Validated per-skill importance weights, keyed by normalized skill name.
///
/// Built only through [`WeightMap::from_json`] / [`WeightMap::from_value`] so
/// the scorer never sees an unchecked map. Keys that match no required skill
/// are kept but simply never looked up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightMap {
    weights: HashMap<String, f64>,
}

impl WeightMap {
    pub fn from_json(raw: &str) -> Result<Self, WeightsError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| WeightsError::Malformed(e.to_string()))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, WeightsError> {
        let object = value.as_object().ok_or(WeightsError::NotAnObject)?;

        let mut weights = HashMap::with_capacity(object.len());
        for (skill, raw) in object {
            let weight = raw
                .as_f64()
                .ok_or_else(|| WeightsError::NotANumber(skill.clone()))?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(WeightsError::OutOfRange {
                    skill: skill.clone(),
                    value: weight,
                });
            }
            weights.insert(normalize_skill(skill), weight);
        }

        Ok(Self { weights })
    }

    /// Weight for a skill, looked up by its normalized form.
    pub fn weight_for(&self, skill: &str) -> f64 {
        self.weights
            .get(&normalize_skill(skill))
            .copied()
            .unwrap_or(DEFAULT_SKILL_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_is_case_insensitive_and_synonym_aware() {
        let weights = WeightMap::from_value(&json!({"React.js": 3.0, "PY": 2})).unwrap();
        assert_eq!(weights.weight_for("react"), 3.0);
        assert_eq!(weights.weight_for("Python"), 2.0);
    }

    #[test]
    fn test_absent_skill_defaults_to_one() {
        let weights = WeightMap::from_value(&json!({"rust": 5.0})).unwrap();
        assert_eq!(weights.weight_for("Go"), DEFAULT_SKILL_WEIGHT);
        assert_eq!(WeightMap::default().weight_for("anything"), 1.0);
    }

    #[test]
    fn test_zero_weight_is_accepted() {
        let weights = WeightMap::from_value(&json!({"go": 0})).unwrap();
        assert_eq!(weights.weight_for("go"), 0.0);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            WeightMap::from_json("{\"go\": "),
            Err(WeightsError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(
            WeightMap::from_json("[1, 2]").unwrap_err(),
            WeightsError::NotAnObject
        );
    }

    #[test]
    fn test_string_weight_rejected() {
        assert_eq!(
            WeightMap::from_value(&json!({"go": "high"})).unwrap_err(),
            WeightsError::NotANumber("go".to_string())
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(matches!(
            WeightMap::from_value(&json!({"go": -2.0})),
            Err(WeightsError::OutOfRange { .. })
        ));
    }
}
