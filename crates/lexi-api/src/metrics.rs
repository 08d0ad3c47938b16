//! Prometheus metrics for monitoring API performance and scheduler activity.

use std::{sync::LazyLock, time::Instant};

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use lexi_srs::Grade;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use regex::Regex;

static LEARNER_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/v1/learners/[^/]+").expect("learner path pattern is valid")
});

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let builder = PrometheusBuilder::new();

    // Configure histogram buckets for request duration (in seconds)
    let builder = builder.set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0],
    )?;

    let handle = builder.install_recorder()?;

    Ok(handle)
}

/// Router serving the `/metrics` endpoint from an installed exporter
pub fn routes(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(handle)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(duration);

    response
}

/// Replace learner names with a placeholder to keep label cardinality low
fn normalize_path(path: &str) -> String {
    LEARNER_SEGMENT
        .replace(path, "/v1/learners/:learner")
        .into_owned()
}

async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record one graded review
pub fn record_review(grade: Grade, was_new: bool) {
    counter!(
        "srs_reviews_total",
        "grade" => grade.as_str(),
        "first_review" => if was_new { "true" } else { "false" }
    )
    .increment(1);
}

/// Record the size of each set in a composed session
pub fn record_session(due: usize, new: usize, relearning: usize) {
    counter!("srs_sessions_total").increment(1);
    histogram!("srs_session_items", "set" => "due").record(due as f64);
    histogram!("srs_session_items", "set" => "new").record(new as f64);
    histogram!("srs_session_items", "set" => "relearning").record(relearning as f64);
}
