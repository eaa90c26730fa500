//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`, `GET /login` - Login page (public)
//! - `POST /login`          - Submission gate (public, rate limited)
//! - `GET  /home`           - Destination page for accepted logins
//! - `GET  /health`         - Health check (public)
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let web_router = web::routes::routes();
    let web_router = if behind_proxy {
        web_router.layer(rate_limit::proxied_layer())
    } else {
        web_router.layer(rate_limit::layer())
    };

    let router = Router::new()
        .merge(web_router)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
