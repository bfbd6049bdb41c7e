//! Resume/job fit scoring: a pure, synchronous function of the two extracted
//! records plus optional skill weights.
//!
//! Data flows one way: normalizer → matcher → independent sub-scorers →
//! aggregator. Nothing here performs I/O or holds mutable state, so a single
//! [`ScoringEngine`] is shared freely across requests.

pub mod config;
pub mod engine;
pub mod experience;
pub mod matcher;
pub mod normalizer;
pub mod projects;
pub mod sections;
pub mod skills;
pub mod writing;

pub use config::{MatcherConfig, ScoringConfig, ScoringScheme};
pub use engine::{FitScorer, ScoringEngine};

/// Rounds to two decimal places, the precision of every reported score.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
