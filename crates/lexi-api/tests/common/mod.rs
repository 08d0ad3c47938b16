#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use lexi_api::{ApiConfig, clock::FixedClock, router, state::ApiState};
use serde::Deserialize;
use tower::ServiceExt;

/// Fixed starting instant for every test
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// Test state builder with a controllable clock
pub struct TestStateBuilder {
    config: ApiConfig,
    clock: FixedClock,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            clock: FixedClock::new(t0()),
        }
    }

    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the state and return the clock handle driving it
    pub fn build(self) -> (ApiState, FixedClock) {
        let state = ApiState::new(&self.config)
            .expect("Failed to create test state")
            .with_clock(self.clock.clone());
        (state, self.clock)
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A client over the full router plus the clock driving it
pub fn test_app() -> (TestClient, ApiState, FixedClock) {
    let (state, clock) = TestStateBuilder::new().build();
    let app = router::router().with_state(state.clone());
    (TestClient::new(app), state, clock)
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        self.send_json("POST", uri, body).await
    }

    /// Send a PUT request with JSON body
    pub async fn put_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        self.send_json("PUT", uri, body).await
    }

    async fn send_json<T: serde::Serialize>(
        &self,
        method: &str,
        uri: &str,
        body: &T,
    ) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Grade an item for a learner
    pub async fn review(&self, learner: &str, item: &str, grade: &str) -> TestResponse {
        self.post_json(
            &format!("/v1/learners/{learner}/reviews"),
            &serde_json::json!({ "item": item, "grade": grade }),
        )
        .await
    }

    /// Ask for a session over the given catalog
    pub async fn session(&self, learner: &str, items: &[&str]) -> TestResponse {
        self.post_json(
            &format!("/v1/learners/{learner}/session"),
            &serde_json::json!({ "items": items }),
        )
        .await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }

    /// The `error` field of a JSON error body
    pub fn error_message(&self) -> String {
        let json: serde_json::Value = self.json();
        json["error"]
            .as_str()
            .expect("Error body should carry an 'error' string")
            .to_string()
    }
}
