use crate::core::context::{build_candidate_context, build_job_context};
use crate::core::requirements::{JobRequirements, RawRequirementsInput};
use crate::core::resume::format_resume;
use crate::core::scoring::{aggregate_score, InvalidWeights, MatchWeights};
use crate::models::{MatchDetail, MatchRecord};
use crate::services::{MatchStore, ModelError, ScoringModel, StoreError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Source tag stamped on every persisted match row
pub const MATCH_SOURCE: &str = "openai-gpt4o";

/// Fatal conditions for a single match computation.
///
/// Every stage fails forward: nothing is retried, nothing is
/// downgraded to a partial result.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("Scoring model failed: {0}")]
    Model(#[from] ModelError),

    #[error("Storage failed: {0}")]
    Store(#[from] StoreError),
}

/// Terminal success state of one match computation
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub final_score: f64,
    pub detail: MatchDetail,
    pub calculated_at: DateTime<Utc>,
}

/// Top-level coordinator for the match computation pipeline.
///
/// Linear state machine: fetch job, fetch candidate, fetch
/// experiences, build contexts, evaluate, aggregate, persist. Clients
/// are injected once at process start; the engine keeps no state
/// across invocations.
pub struct MatchEngine {
    store: Arc<dyn MatchStore>,
    model: Arc<dyn ScoringModel>,
    weights: MatchWeights,
}

impl MatchEngine {
    /// Weights are validated here, once, not on every computation.
    pub fn new(
        store: Arc<dyn MatchStore>,
        model: Arc<dyn ScoringModel>,
        weights: MatchWeights,
    ) -> Result<Self, InvalidWeights> {
        weights.validate()?;
        Ok(Self {
            store,
            model,
            weights,
        })
    }

    /// Compute, persist, and return the match for one (job, candidate)
    /// pair. Identifiers are validated before any I/O happens.
    pub async fn compute_match(
        &self,
        job_id: &str,
        candidate_id: &str,
    ) -> Result<MatchOutcome, MatchError> {
        let job_id = parse_id("job_id", job_id)?;
        let candidate_id = parse_id("candidate_id", candidate_id)?;

        tracing::info!("Computing match for job {} / candidate {}", job_id, candidate_id);

        let job = self
            .store
            .get_job(job_id)
            .await?
            .ok_or(MatchError::NotFound {
                kind: "Job",
                id: job_id,
            })?;

        let candidate = self
            .store
            .get_candidate(candidate_id)
            .await?
            .ok_or(MatchError::NotFound {
                kind: "Candidate",
                id: candidate_id,
            })?;

        let experiences = self.store.get_experiences(candidate_id).await?;
        tracing::debug!(
            "Fetched job '{}', candidate '{}', {} experience rows",
            job.job_title,
            candidate.full_name,
            experiences.len()
        );

        let resume = format_resume(&experiences);
        let requirements =
            JobRequirements::resolve(RawRequirementsInput::from_value(job.requirements_json.as_ref()));

        let job_context = build_job_context(&job, &requirements);
        let candidate_context = build_candidate_context(&candidate, &resume);

        let analysis = self.model.evaluate(&job_context, &candidate_context).await?;

        let final_score = aggregate_score(&analysis, &self.weights);
        let calculated_at = Utc::now();
        let detail = MatchDetail::new(&analysis, final_score, &self.weights, calculated_at);

        tracing::info!(
            "Match scored {:.2} (seniority {:.1}, role fit {:.1}, industry {:.1}, stability {:.1})",
            final_score,
            analysis.seniority_match.score,
            analysis.role_fit.score,
            analysis.industry.score,
            analysis.stability.score
        );

        let record = MatchRecord {
            job_id,
            candidate_id,
            match_score: final_score,
            match_detail: detail.clone(),
            match_source: MATCH_SOURCE.to_string(),
            calculated_at,
        };

        self.store.upsert_match(&record).await?;

        Ok(MatchOutcome {
            job_id,
            candidate_id,
            final_score,
            detail,
            calculated_at,
        })
    }
}

fn parse_id(field: &str, value: &str) -> Result<Uuid, MatchError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MatchError::InvalidInput(format!(
            "{} must be a non-empty identifier",
            field
        )));
    }

    Uuid::parse_str(trimmed)
        .map_err(|_| MatchError::InvalidInput(format!("{} is not a valid UUID: {}", field, value)))
}
