//! Match Engine - AI-assisted job-candidate match scoring service
//!
//! This library computes the fit between a job posting and a candidate
//! profile: it assembles natural-language context from stored records,
//! delegates the semantic judgment to a scoring model with a strict
//! structured-output contract, combines the per-dimension scores with
//! a fixed weight table, and upserts the result keyed by the
//! (job, candidate) pair.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchEngine, MatchError, MatchOutcome, MatchWeights};
pub use models::{Candidate, Experience, Job, MatchAnalysis, MatchRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let weights = MatchWeights::default();
        assert!(weights.validate().is_ok());
    }
}
