//! Log output for the service.
//!
//! Development prints readable multi-line events with source locations.
//! Production writes one JSON object per event, flattened, with the request
//! span attached so `request_id` lands on every line.

use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::Environment;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Filter directives used when `RUST_LOG` is unset.
///
/// Scheduler transitions are logged at `trace`, so `RUST_LOG=lexi_srs=trace`
/// is the switch for following individual reviews.
pub const fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Development => "debug,tower_http=debug,lexi_srs=debug",
        Environment::Production => "info,tower_http=info,lexi_srs=info",
    }
}

fn output_layer(env: &Environment) -> BoxedLayer {
    let fmt = tracing_subscriber::fmt::layer().with_target(true);
    match env {
        Environment::Development => fmt.with_file(true).with_line_number(true).pretty().boxed(),
        Environment::Production => fmt
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .flatten_event(true)
            .boxed(),
    }
}

/// Install the global subscriber for `env`. Call once, at startup.
pub fn init_tracing(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    tracing_subscriber::registry()
        .with(output_layer(env).with_filter(filter))
        .init();

    tracing::info!(environment = ?env, "Tracing initialized");
}
