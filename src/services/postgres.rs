use crate::models::{Candidate, Experience, Job, MatchRecord, RawDate};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to encode match detail: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Upsert confirmed no row for job {job_id} / candidate {candidate_id}")]
    UpsertFailed { job_id: Uuid, candidate_id: Uuid },
}

/// Record store consumed by the match pipeline.
///
/// Fetch-by-id operations return zero-or-one record; zero is a
/// not-found condition the orchestrator rejects as fatal.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn get_job(&self, job_id: Uuid) -> Result<Option<Job>, StoreError>;
    async fn get_candidate(&self, candidate_id: Uuid) -> Result<Option<Candidate>, StoreError>;
    async fn get_experiences(&self, candidate_id: Uuid) -> Result<Vec<Experience>, StoreError>;
    async fn upsert_match(&self, record: &MatchRecord) -> Result<(), StoreError>;
}

/// PostgreSQL store for jobs, candidates, experience rows, and
/// computed match results.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store from a connection string.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[async_trait]
impl MatchStore for PostgresStore {
    async fn get_job(&self, job_id: Uuid) -> Result<Option<Job>, StoreError> {
        let query = r#"
            SELECT id, job_title, description, job_level, requirements_json
            FROM jobs
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Job {
            id: row.get("id"),
            job_title: row.get("job_title"),
            description: row.get("description"),
            job_level: row.get("job_level"),
            requirements_json: row.get("requirements_json"),
        }))
    }

    async fn get_candidate(&self, candidate_id: Uuid) -> Result<Option<Candidate>, StoreError> {
        let query = r#"
            SELECT id, full_name, current_job_title, industry, seniority
            FROM candidates
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(candidate_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Candidate {
            id: row.get("id"),
            full_name: row.get("full_name"),
            current_job_title: row.get("current_job_title"),
            industry: row.get("industry"),
            seniority: row.get("seniority"),
        }))
    }

    async fn get_experiences(&self, candidate_id: Uuid) -> Result<Vec<Experience>, StoreError> {
        let query = r#"
            SELECT role_title, company_name, start_date, end_date, description
            FROM candidate_experience
            WHERE candidate_id = $1
        "#;

        let rows = sqlx::query(query)
            .bind(candidate_id)
            .fetch_all(&self.pool)
            .await?;

        let experiences = rows
            .iter()
            .map(|row| Experience {
                role_title: row.get("role_title"),
                company_name: row.get("company_name"),
                // Date columns are text upstream; degradation to
                // RawDate keeps malformed values instead of failing.
                start_date: RawDate::from_text(row.get("start_date")),
                end_date: RawDate::from_text(row.get("end_date")),
                description: row.get("description"),
            })
            .collect();

        Ok(experiences)
    }

    /// Best-effort upsert keyed by (job_id, candidate_id).
    ///
    /// Update first; insert when no row was affected; fail when the
    /// insert confirms no row either. Not transactional: a lost race
    /// on the same key surfaces as a UNIQUE-constraint conflict from
    /// the store rather than a silent duplicate.
    async fn upsert_match(&self, record: &MatchRecord) -> Result<(), StoreError> {
        let detail = serde_json::to_value(&record.match_detail)?;

        let update = r#"
            UPDATE job_candidate_matches
            SET match_score = $3,
                match_detail = $4,
                match_source = $5,
                updated_at = $6
            WHERE job_id = $1 AND candidate_id = $2
        "#;

        let result = sqlx::query(update)
            .bind(record.job_id)
            .bind(record.candidate_id)
            .bind(record.match_score)
            .bind(&detail)
            .bind(&record.match_source)
            .bind(record.calculated_at)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            tracing::debug!(
                "Updated match row for job {} / candidate {}",
                record.job_id,
                record.candidate_id
            );
            return Ok(());
        }

        let insert = r#"
            INSERT INTO job_candidate_matches
                (job_id, candidate_id, match_score, match_detail, match_source, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING id
        "#;

        let inserted = sqlx::query(insert)
            .bind(record.job_id)
            .bind(record.candidate_id)
            .bind(record.match_score)
            .bind(&detail)
            .bind(&record.match_source)
            .bind(record.calculated_at)
            .fetch_optional(&self.pool)
            .await?;

        if inserted.is_none() {
            return Err(StoreError::UpsertFailed {
                job_id: record.job_id,
                candidate_id: record.candidate_id,
            });
        }

        tracing::debug!(
            "Inserted match row for job {} / candidate {}",
            record.job_id,
            record.candidate_id
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_failed_message_carries_key() {
        let job_id = Uuid::new_v4();
        let candidate_id = Uuid::new_v4();
        let err = StoreError::UpsertFailed {
            job_id,
            candidate_id,
        };
        let message = err.to_string();
        assert!(message.contains(&job_id.to_string()));
        assert!(message.contains(&candidate_id.to_string()));
    }
}
