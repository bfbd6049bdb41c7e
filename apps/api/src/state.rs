use std::sync::Arc;

use crate::extraction::EntityExtractor;
use crate::scoring::FitScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text → typed records. Default: `LlmExtractor`.
    pub extractor: Arc<dyn EntityExtractor>,
    /// Records → score. Default: `ScoringEngine` with the configured scheme.
    pub fit_scorer: Arc<dyn FitScorer>,
}
