use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use na_meste_config::Environment;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Installs the global subscriber.
///
/// `local` prints compact human-readable lines at debug level, `prod` prints JSON
/// lines at info level. `RUST_LOG` overrides both.
pub fn init_tracing(environment: Environment) {
    let default_directives = match environment {
        Environment::Local => "na_meste=debug,tower_http=debug,axum::rejection=trace",
        Environment::Prod => "na_meste=info,tower_http=warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    match environment {
        Environment::Local => {
            let console_layer = fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact()
                .with_filter(filter);

            tracing_subscriber::registry().with(console_layer).init();
        }
        Environment::Prod => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_filter(filter);

            tracing_subscriber::registry().with(json_layer).init();
        }
    }
}

/// Opens a span per request carrying the request id, then logs the outcome.
///
/// Expects the `x-request-id` header to be set by `SetRequestIdLayer`.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    async move {
        info!("Incoming request");

        let response = next.run(req).await;
        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        match status {
            400..=499 => warn!(status, latency_ms, "Client error"),
            500..=599 => error!(status, latency_ms, "Server error"),
            _ => info!(status, latency_ms, "Request completed"),
        }

        response
    }
    .instrument(span)
    .await
}
