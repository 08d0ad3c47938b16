use axum::Router;

use crate::{practice, progress, state::ApiState};

/// V1 API routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .merge(practice::routes())
        .merge(progress::routes())
}
