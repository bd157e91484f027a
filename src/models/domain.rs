use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job posting with its free-form requirements payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    #[serde(rename = "jobTitle", alias = "job_title")]
    pub job_title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "jobLevel", alias = "job_level", default)]
    pub job_level: Option<String>,
    #[serde(rename = "requirementsJson", alias = "requirements_json", default)]
    pub requirements_json: Option<serde_json::Value>,
}

/// Candidate profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    #[serde(rename = "fullName", alias = "full_name")]
    pub full_name: String,
    #[serde(rename = "currentJobTitle", alias = "current_job_title", default)]
    pub current_job_title: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub seniority: Option<String>,
}

/// A date field as it arrives from upstream records.
///
/// Experience rows carry dates as nulls, ISO strings, or proper date
/// values depending on how they were imported. Each variant resolves
/// through a total function instead of an ad-hoc parse chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Structured(NaiveDate),
    Text(String),
    Absent,
}

impl Default for RawDate {
    fn default() -> Self {
        RawDate::Absent
    }
}

impl RawDate {
    /// Build from an optional text column.
    pub fn from_text(value: Option<String>) -> Self {
        match value {
            Some(s) if !s.trim().is_empty() => RawDate::Text(s),
            _ => RawDate::Absent,
        }
    }

    /// Resolve to a calendar date if one can be determined.
    ///
    /// Accepts RFC 3339 timestamps (with or without a 'Z' suffix) and
    /// plain `YYYY-MM-DD` strings. Anything else yields `None`.
    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            RawDate::Structured(date) => Some(*date),
            RawDate::Text(s) => parse_date_text(s),
            RawDate::Absent => None,
        }
    }

    /// Resolve to a calendar date, degrading to today when the value
    /// is absent or unparseable. Total function: never errors.
    pub fn resolve_or_today(&self) -> NaiveDate {
        self.resolve().unwrap_or_else(|| Utc::now().date_naive())
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    let date_part = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// One employment record for a candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "roleTitle", alias = "role_title", default)]
    pub role_title: Option<String>,
    #[serde(rename = "companyName", alias = "company_name", default)]
    pub company_name: Option<String>,
    #[serde(rename = "startDate", alias = "start_date", default)]
    pub start_date: RawDate,
    #[serde(rename = "endDate", alias = "end_date", default)]
    pub end_date: RawDate,
    #[serde(default)]
    pub description: Option<String>,
}

/// Seniority evaluation against the career matrix (40%)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeniorityMatch {
    /// Job level on the career matrix (e.g. PM3, SE2)
    pub job_level: String,
    /// Inferred candidate level on the career matrix
    pub candidate_level: String,
    /// Score from 0.0 to 100.0
    pub score: f64,
    /// Why the score was assigned, especially on level mismatch
    pub reason: String,
}

/// Role fit evaluation (20%)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RoleFit {
    /// Role the job requires
    pub job_role: String,
    /// Candidate's current role
    pub candidate_role: String,
    /// Score from 0.0 to 100.0
    pub score: f64,
    /// Why the score was assigned, especially on role mismatch
    pub reason: String,
}

/// Industry alignment evaluation (30%)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IndustryFit {
    /// Industries the job requires
    pub job_industries: Vec<String>,
    /// Industries the candidate has worked in
    pub candidate_industries: Vec<String>,
    /// Score from 0.0 to 100.0
    pub score: f64,
    /// Why the score was assigned
    pub reason: String,
}

/// Employment stability evaluation (10%)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Stability {
    /// Score from 0.0 to 100.0
    pub score: f64,
    /// Why the score was assigned, based on tenure history
    pub reason: String,
}

/// Structured output contract for the scoring model.
///
/// All four dimensions must be populated; a response missing any field
/// fails deserialization and surfaces as a model error, never as a
/// silently defaulted score.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchAnalysis {
    pub seniority_match: SeniorityMatch,
    pub role_fit: RoleFit,
    pub industry: IndustryFit,
    pub stability: Stability,
    /// Main gap detected between candidate and job, if any
    pub key_gap: Option<String>,
}

/// Full breakdown persisted alongside the final score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetail {
    pub seniority_match: SeniorityMatch,
    pub role_fit: RoleFit,
    pub industry: IndustryFit,
    pub stability: Stability,
    pub key_gap: Option<String>,
    pub final_score: f64,
    pub weights: crate::core::scoring::MatchWeights,
    pub calculated_at: DateTime<Utc>,
}

impl MatchDetail {
    pub fn new(
        analysis: &MatchAnalysis,
        final_score: f64,
        weights: &crate::core::scoring::MatchWeights,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            seniority_match: analysis.seniority_match.clone(),
            role_fit: analysis.role_fit.clone(),
            industry: analysis.industry.clone(),
            stability: analysis.stability.clone(),
            key_gap: analysis.key_gap.clone(),
            final_score,
            weights: weights.clone(),
            calculated_at,
        }
    }
}

/// Row persisted to job_candidate_matches, one per (job, candidate) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub match_score: f64,
    pub match_detail: MatchDetail,
    pub match_source: String,
    pub calculated_at: DateTime<Utc>,
}
