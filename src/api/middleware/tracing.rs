//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span carrying the method, path, and HTTP
/// version; the response is logged with its status code and latency in
/// milliseconds, and server failures are logged at `WARN`.
///
/// Form bodies are never part of the span, so submitted credentials do not
/// reach the logs.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/login version=HTTP/1.1}: Processing request
/// INFO request{method=POST uri=/login version=HTTP/1.1}: Response 303 See Other in 1ms
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::WARN))
}
