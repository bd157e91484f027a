use crate::core::{MatchEngine, MatchError};
use crate::models::{ComputeMatchRequest, ComputeMatchResponse, ErrorResponse, HealthResponse};
use crate::services::PostgresStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchEngine>,
    pub store: Arc<PostgresStore>,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/compute", web::post().to(compute_match));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Compute match endpoint
///
/// POST /api/v1/matches/compute
///
/// Request body:
/// ```json
/// {
///   "jobId": "uuid",
///   "candidateId": "uuid"
/// }
/// ```
async fn compute_match(
    state: web::Data<AppState>,
    req: web::Json<ComputeMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for compute_match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.engine.compute_match(&req.job_id, &req.candidate_id).await {
        Ok(outcome) => HttpResponse::Ok().json(ComputeMatchResponse {
            status: "success".to_string(),
            job_id: outcome.job_id,
            candidate_id: outcome.candidate_id,
            match_score: outcome.final_score,
            match_detail: outcome.detail,
        }),
        Err(e) => {
            tracing::error!(
                "Match computation failed for job {} / candidate {}: {}",
                req.job_id,
                req.candidate_id,
                e
            );
            error_response(e)
        }
    }
}

fn error_response(error: MatchError) -> HttpResponse {
    let (status_code, kind) = match &error {
        MatchError::InvalidInput(_) => (400, "invalid_input"),
        MatchError::NotFound { .. } => (404, "not_found"),
        MatchError::Model(_) => (502, "model_error"),
        MatchError::Store(_) => (500, "storage_error"),
    };

    let body = ErrorResponse {
        error: kind.to_string(),
        message: error.to_string(),
        status_code,
    };

    match status_code {
        400 => HttpResponse::BadRequest().json(body),
        404 => HttpResponse::NotFound().json(body),
        502 => HttpResponse::BadGateway().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}
