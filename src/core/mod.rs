// Core pipeline exports
pub mod context;
pub mod duration;
pub mod pipeline;
pub mod requirements;
pub mod resume;
pub mod rubric;
pub mod scoring;

pub use context::{build_candidate_context, build_job_context};
pub use duration::{calendar_duration, format_duration};
pub use pipeline::{MatchEngine, MatchError, MatchOutcome, MATCH_SOURCE};
pub use requirements::{JobRequirements, RawRequirementsInput};
pub use resume::{format_resume, NO_EXPERIENCE_SENTINEL};
pub use scoring::{aggregate_score, InvalidWeights, MatchWeights};
