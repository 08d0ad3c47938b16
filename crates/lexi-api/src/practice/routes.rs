use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use lexi_srs::{Grade, ReviewOutcome};
use validator::Validate;

use crate::{
    ApiState,
    error::ApiError,
    metrics,
    validation::{validate_catalog, validate_item_id, validate_learner},
};

use super::model::{ReviewSubmission, SessionRequest, SessionResponse};

/// Create the practice routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/learners/{learner}/reviews", post(submit_review))
        .route("/learners/{learner}/session", post(build_session))
}

/// Grade one item and persist the resulting record
async fn submit_review(
    State(state): State<ApiState>,
    Path(learner): Path<String>,
    Json(payload): Json<ReviewSubmission>,
) -> Result<Json<ReviewOutcome>, ApiError> {
    validate_learner(&learner)?;
    payload.validate()?;
    validate_item_id(&payload.item)?;

    // Unknown grades fail here instead of falling back to any transition
    let grade: Grade = payload.grade.parse()?;

    let now = state.clock.now();
    let outcome = state
        .store
        .review(&state.scheduler, &learner, &payload.item, grade, now)
        .await?;

    metrics::record_review(grade, outcome.was_new);
    tracing::info!(
        learner = %learner,
        item = %outcome.item,
        %grade,
        level = outcome.record.level,
        next_review_at = %outcome.record.next_review_at,
        "Review recorded"
    );

    Ok(Json(outcome))
}

/// Split the submitted catalog into due, new and relearning items
async fn build_session(
    State(state): State<ApiState>,
    Path(learner): Path<String>,
    Json(payload): Json<SessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    validate_learner(&learner)?;
    validate_catalog(&payload.items, state.max_catalog_size)?;

    let now = state.clock.now();
    let sets = state.store.session(&learner, &payload.items, now).await;
    let response = SessionResponse::new(sets, payload.items.len());

    metrics::record_session(response.due.len(), response.new.len(), response.relearning.len());
    tracing::debug!(
        learner = %learner,
        catalog = payload.items.len(),
        due = response.due.len(),
        new = response.new.len(),
        relearning = response.relearning.len(),
        "Session composed"
    );

    Ok(Json(response))
}
