//! Upstream collaborators of the scorer: document text ingestion and
//! model-backed entity extraction. Everything returned from here has been
//! validated, so the scorer never sees partially-valid records.

pub mod prompts;
pub mod text;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::prompts::{JOB_EXTRACT_PROMPT, RESUME_EXTRACT_PROMPT};
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_INVENTION_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::job::JobRecord;
use crate::models::resume::ResumeRecord;
use crate::models::RecordError;

/// Resume text beyond this many characters is not sent to the model.
const MAX_RESUME_CHARS: usize = 10_000;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document type '{0}'; upload a PDF or plain-text file")]
    UnsupportedType(String),

    #[error("could not read document: {0}")]
    UnreadableDocument(String),

    #[error("document contains no extractable text")]
    EmptyText,

    #[error("could not parse {what} from model output: {detail}")]
    Unparseable { what: &'static str, detail: String },

    #[error("extracted {what} is invalid: {source}")]
    Invalid {
        what: &'static str,
        source: RecordError,
    },

    #[error("model call failed: {0}")]
    Model(LlmError),
}

impl ExtractionError {
    fn from_llm(what: &'static str, error: LlmError) -> Self {
        if error.is_bad_output() {
            ExtractionError::Unparseable {
                what,
                detail: error.to_string(),
            }
        } else {
            ExtractionError::Model(error)
        }
    }
}

/// Turns free text into typed records. Carried in `AppState` as
/// `Arc<dyn EntityExtractor>` so handlers never depend on a concrete model.
#[async_trait]
pub trait EntityExtractor: Send + Sync {
    async fn extract_resume(
        &self,
        resume_text: &str,
        target_role: Option<&str>,
    ) -> Result<ResumeRecord, ExtractionError>;

    async fn extract_job(&self, jd_text: &str) -> Result<JobRecord, ExtractionError>;
}

/// Model-backed extractor.
pub struct LlmExtractor {
    llm: LlmClient,
}

impl LlmExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl EntityExtractor for LlmExtractor {
    async fn extract_resume(
        &self,
        resume_text: &str,
        target_role: Option<&str>,
    ) -> Result<ResumeRecord, ExtractionError> {
        if resume_text.trim().is_empty() {
            return Err(ExtractionError::EmptyText);
        }

        let truncated: String = resume_text.chars().take(MAX_RESUME_CHARS).collect();
        let prompt = format!(
            "{}\n\n{NO_INVENTION_INSTRUCTION}",
            RESUME_EXTRACT_PROMPT
                .replace("{target_role}", target_role.unwrap_or_default())
                .replace("{resume_text}", &truncated)
        );

        info!("extracting resume entities");
        let mut record: ResumeRecord = self
            .llm
            .call_json(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| ExtractionError::from_llm("resume", e))?;

        record
            .validate()
            .map_err(|source| ExtractionError::Invalid {
                what: "resume",
                source,
            })?;
        reconcile_experience(&mut record, target_role);

        info!(
            skills = record.skills.len(),
            years = record.total_experience_years,
            "resume entities extracted"
        );
        Ok(record)
    }

    async fn extract_job(&self, jd_text: &str) -> Result<JobRecord, ExtractionError> {
        if jd_text.trim().is_empty() {
            return Err(ExtractionError::EmptyText);
        }

        let prompt = format!(
            "{}\n\n{NO_INVENTION_INSTRUCTION}",
            JOB_EXTRACT_PROMPT.replace("{jd_text}", jd_text)
        );

        info!("extracting job requirements");
        let record: JobRecord = self
            .llm
            .call_json(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| ExtractionError::from_llm("job description", e))?;

        record
            .validate()
            .map_err(|source| ExtractionError::Invalid {
                what: "job description",
                source,
            })?;

        info!(
            required_skills = record.required_skills.len(),
            min_years = record.min_experience_years,
            "job requirements extracted"
        );
        Ok(record)
    }
}

/// Fills in `total_experience_years` when the model left it at zero but did
/// list roles. With a role hint only roles mentioning it (or mentioned by it)
/// are counted.
pub(crate) fn reconcile_experience(record: &mut ResumeRecord, target_role: Option<&str>) {
    if record.total_experience_years > 0.0 || record.experience.is_empty() {
        return;
    }

    let hint = target_role
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty());

    let total: f64 = record
        .experience
        .iter()
        .filter(|entry| match (&hint, &entry.role) {
            (None, _) => true,
            (Some(hint), Some(role)) => {
                let role = role.trim().to_lowercase();
                !role.is_empty() && (role.contains(hint.as_str()) || hint.contains(&role))
            }
            (Some(_), None) => false,
        })
        .map(|entry| entry.years)
        .sum();

    if total > 0.0 {
        warn!(total, "total experience missing from extraction, recomputed from roles");
        record.total_experience_years = total;
    }
}
