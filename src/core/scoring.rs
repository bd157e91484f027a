use crate::models::MatchAnalysis;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a weight table does not sum to 1.0
#[derive(Debug, Error)]
#[error("scoring weights must sum to 1.0, got {0}")]
pub struct InvalidWeights(pub f64);

/// Weight table for combining the four dimension scores.
///
/// Canonical table: seniority 40%, role fit 20%, industry 30%,
/// stability 10%. Must sum to exactly 1.0; validated once at startup,
/// not on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub seniority: f64,
    pub role_fit: f64,
    pub industry: f64,
    pub stability: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            seniority: 0.40,
            role_fit: 0.20,
            industry: 0.30,
            stability: 0.10,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.seniority + self.role_fit + self.industry + self.stability
    }

    pub fn validate(&self) -> Result<(), InvalidWeights> {
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(InvalidWeights(sum));
        }
        Ok(())
    }
}

/// Combine the model's per-dimension scores into the final 0-100 score.
///
/// `final = Σ(dimension.score * weight)`, rounded half-up to 2 decimal
/// places (f64::round on the value scaled by 100).
pub fn aggregate_score(analysis: &MatchAnalysis, weights: &MatchWeights) -> f64 {
    let raw = analysis.seniority_match.score * weights.seniority
        + analysis.role_fit.score * weights.role_fit
        + analysis.industry.score * weights.industry
        + analysis.stability.score * weights.stability;

    round2(raw)
}

/// Round half-up to 2 decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
