use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use lexi_srs::{SrsError, StudyProgress};

use crate::{
    ApiState,
    error::ApiError,
    validation::{validate_catalog, validate_item_id, validate_learner},
};

use super::model::{ResetRequest, ResetResponse};

/// Create the progress routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/learners/{learner}/progress",
            get(get_progress).put(import_progress),
        )
        .route("/learners/{learner}/progress/reset", post(reset_progress))
}

/// Every record the learner has, keyed by item id
async fn get_progress(
    State(state): State<ApiState>,
    Path(learner): Path<String>,
) -> Result<Json<StudyProgress>, ApiError> {
    validate_learner(&learner)?;
    Ok(Json(state.store.progress(&learner).await))
}

/// Replace the learner's records with a previously exported copy
async fn import_progress(
    State(state): State<ApiState>,
    Path(learner): Path<String>,
    Json(progress): Json<StudyProgress>,
) -> Result<StatusCode, ApiError> {
    validate_learner(&learner)?;

    if progress.len() > state.max_catalog_size {
        return Err(ApiError::Validation(format!(
            "Progress holds {} records, the limit is {}",
            progress.len(),
            state.max_catalog_size
        )));
    }

    let max = state.scheduler.max_level();
    for (item, record) in &progress {
        validate_item_id(item)?;
        // Levels past the table are rejected, never clamped
        if record.level > max {
            let err = SrsError::InvalidLevel {
                level: record.level,
                max,
            };
            return Err(ApiError::Validation(format!("{err} (item '{item}')")));
        }
    }

    tracing::info!(learner = %learner, records = progress.len(), "Progress imported");
    state.store.replace(&learner, progress).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Clear the records of specific items
async fn reset_progress(
    State(state): State<ApiState>,
    Path(learner): Path<String>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<ResetResponse>, ApiError> {
    validate_learner(&learner)?;
    validate_catalog(&payload.items, state.max_catalog_size)?;

    let removed = state.store.reset(&learner, &payload.items).await;
    tracing::info!(
        learner = %learner,
        requested = payload.items.len(),
        removed,
        "Progress reset"
    );

    Ok(Json(ResetResponse { removed }))
}
