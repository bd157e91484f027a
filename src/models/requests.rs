use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to compute a job-candidate match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComputeMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "job_id", rename = "jobId")]
    pub job_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "candidate_id", rename = "candidateId")]
    pub candidate_id: String,
}
