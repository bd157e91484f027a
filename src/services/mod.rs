// Service exports
pub mod openai;
pub mod postgres;

pub use openai::{ModelError, OpenAiClient, ScoringModel};
pub use postgres::{MatchStore, PostgresStore, StoreError};
