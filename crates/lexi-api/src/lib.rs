//! HTTP surface over the Lexi spaced-repetition scheduler.

pub mod clock;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod practice;
pub mod progress;
pub mod router;
pub mod state;
pub mod store;
pub mod tracing;
pub mod v1;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
