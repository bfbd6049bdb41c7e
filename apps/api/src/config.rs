use anyhow::{bail, Context, Result};

use crate::scoring::{MatcherConfig, ScoringConfig, ScoringScheme};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub llm_max_retries: u32,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            llm_max_retries: env_or("LLM_MAX_RETRIES", "3")
                .parse::<u32>()
                .context("LLM_MAX_RETRIES must be a non-negative integer")?,
            scoring: scoring_from_lookup(|key| std::env::var(key).ok())?,
        })
    }
}

/// Builds the scoring configuration from a key lookup so it can be tested
/// without touching the process environment.
fn scoring_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<ScoringConfig> {
    let defaults = MatcherConfig::default();

    let scheme = match lookup("SCORING_SCHEME") {
        Some(raw) => raw
            .parse::<ScoringScheme>()
            .map_err(anyhow::Error::msg)
            .context("SCORING_SCHEME is invalid")?,
        None => ScoringScheme::default(),
    };

    let threshold = match lookup("FUZZY_THRESHOLD") {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .context("FUZZY_THRESHOLD must be a number")?,
        None => defaults.threshold,
    };
    if !(threshold > 0.0 && threshold <= 1.0) {
        bail!("FUZZY_THRESHOLD must lie in (0, 1], got {threshold}");
    }

    let min_substring_len = match lookup("SUBSTRING_MIN_LEN") {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .context("SUBSTRING_MIN_LEN must be a non-negative integer")?,
        None => defaults.min_substring_len,
    };

    Ok(ScoringConfig {
        scheme,
        matcher: MatcherConfig {
            threshold,
            min_substring_len,
        },
    })
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
