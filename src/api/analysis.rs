//! Analysis API endpoints.

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::types::{AnalysisReport, AnalysisRequest, BatchOutcome};
use crate::AppState;

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Serialize)]
pub struct ApiMeta {
    /// Unix timestamp (milliseconds) when the response was produced.
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta {
                timestamp: chrono::Utc::now().timestamp_millis(),
            },
        }
    }
}

/// Create the analysis router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(analyze))
        .route("/batch", post(analyze_batch))
}

/// Analyse a single held instrument.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>> {
    let report = state.analysis.analyze(&request).map_err(|e| {
        warn!("Rejected analysis request for {}: {}", request.symbol, e);
        AppError::from(e)
    })?;

    Ok(Json(ApiResponse::new(report)))
}

/// Analyse several held instruments independently.
async fn analyze_batch(
    State(state): State<AppState>,
    Json(requests): Json<Vec<AnalysisRequest>>,
) -> Result<Json<ApiResponse<Vec<BatchOutcome>>>> {
    if requests.len() > state.config.max_batch_size {
        return Err(AppError::BadRequest(format!(
            "Batch of {} instruments exceeds the limit of {}",
            requests.len(),
            state.config.max_batch_size
        )));
    }

    let count = requests.len();
    let outcomes = state.analysis.analyze_batch(requests).await;
    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    info!("Analysed batch of {} instruments ({} rejected)", count, failed);

    Ok(Json(ApiResponse::new(outcomes)))
}
