// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, Experience, IndustryFit, Job, MatchAnalysis, MatchDetail, MatchRecord, RawDate,
    RoleFit, SeniorityMatch, Stability,
};
pub use requests::ComputeMatchRequest;
pub use responses::{ComputeMatchResponse, ErrorResponse, HealthResponse};
