use crate::models::domain::MatchDetail;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for the compute match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeMatchResponse {
    pub status: String,
    #[serde(rename = "jobId")]
    pub job_id: Uuid,
    #[serde(rename = "candidateId")]
    pub candidate_id: Uuid,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchDetail")]
    pub match_detail: MatchDetail,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
