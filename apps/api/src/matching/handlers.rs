//! Axum route handlers for the Scoring API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, Span};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::text::extract_text;
use crate::extraction::ExtractionError;
use crate::models::job::JobRecord;
use crate::models::resume::ResumeRecord;
use crate::models::score::MatchResult;
use crate::models::weights::WeightMap;
use crate::scoring::ScoringScheme;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StructuredScoreRequest {
    pub resume: ResumeRecord,
    pub job: JobRecord,
    /// Raw client JSON; validated into a `WeightMap` before scoring.
    #[serde(default)]
    pub weights: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub request_id: Uuid,
    pub scored_at: DateTime<Utc>,
    pub scheme: ScoringScheme,
    pub result: MatchResult,
}

/// Fields collected from the multipart upload.
#[derive(Default)]
struct ScoreForm {
    resume_file: Option<(String, Bytes)>,
    jd_text: Option<String>,
    target_role: Option<String>,
    weights: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/score
///
/// Multipart fields: `resume_file` (PDF or plain text), `jd_text`, and the
/// optional `target_role` and `weights` (JSON object). Weights and form fields
/// are validated before any extraction call is made.
#[instrument(skip_all, fields(request_id = tracing::field::Empty))]
pub async fn handle_score(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScoreResponse>, AppError> {
    let request_id = Uuid::new_v4();
    Span::current().record("request_id", tracing::field::display(request_id));

    let form = read_score_form(multipart).await?;

    let weights = form
        .weights
        .as_deref()
        .map(WeightMap::from_json)
        .transpose()?;

    let jd_text = form
        .jd_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("jd_text cannot be empty".to_string()))?;

    let (content_type, data) = form
        .resume_file
        .ok_or_else(|| AppError::Validation("resume_file is required".to_string()))?;

    let resume_text = tokio::task::spawn_blocking(move || extract_text(&content_type, &data))
        .await
        .map_err(|e| ExtractionError::UnreadableDocument(format!("document parser crashed: {e}")))??;

    let target_role = form.target_role.as_deref().filter(|r| !r.trim().is_empty());
    let (resume, job) = tokio::try_join!(
        state.extractor.extract_resume(&resume_text, target_role),
        state.extractor.extract_job(&jd_text),
    )?;

    Ok(Json(score_records(&state, request_id, resume, job, weights).await?))
}

/// POST /api/v1/score/structured
///
/// Scores already-extracted records. No model call is made.
#[instrument(skip_all, fields(request_id = tracing::field::Empty))]
pub async fn handle_score_structured(
    State(state): State<AppState>,
    payload: Result<Json<StructuredScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let request_id = Uuid::new_v4();
    Span::current().record("request_id", tracing::field::display(request_id));

    let Json(request) = payload?;

    let weights = request
        .weights
        .as_ref()
        .map(WeightMap::from_value)
        .transpose()?;

    request.resume.validate()?;
    request.job.validate()?;

    Ok(Json(
        score_records(&state, request_id, request.resume, request.job, weights).await?,
    ))
}

/// Runs the scorer on the blocking pool; matching cost grows with skill length.
async fn score_records(
    state: &AppState,
    request_id: Uuid,
    resume: ResumeRecord,
    job: JobRecord,
    weights: Option<WeightMap>,
) -> Result<ScoreResponse, AppError> {
    let scorer = Arc::clone(&state.fit_scorer);
    let result = tokio::task::spawn_blocking(move || scorer.score(&resume, &job, weights.as_ref()))
        .await
        .map_err(|e| anyhow::Error::new(e).context("scoring task failed"))?;

    info!(
        total_score = result.total_score,
        matched = result.matched_skills.len(),
        missing = result.missing_skills.len(),
        "scoring complete"
    );

    Ok(ScoreResponse {
        request_id,
        scored_at: Utc::now(),
        scheme: state.fit_scorer.scheme(),
        result,
    })
}

async fn read_score_form(mut multipart: Multipart) -> Result<ScoreForm, AppError> {
    let mut form = ScoreForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let read_error = |e: axum::extract::multipart::MultipartError| {
            AppError::Validation(format!("could not read field '{name}': {e}"))
        };

        match name.as_str() {
            "resume_file" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(read_error)?;
                form.resume_file = Some((content_type, data));
            }
            "jd_text" => form.jd_text = Some(field.text().await.map_err(read_error)?),
            "target_role" => form.target_role = Some(field.text().await.map_err(read_error)?),
            "weights" => {
                let raw = field.text().await.map_err(read_error)?;
                if !raw.trim().is_empty() {
                    form.weights = Some(raw);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}
