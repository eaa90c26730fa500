//! Rate limiting middleware using token bucket algorithm.
//!
//! The login form is an unauthenticated POST target, so the flow is rate
//! limited per client IP to keep submission floods from a single source in
//! check. Requests exceeding the limit receive `429 Too Many Requests`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Creates the rate limiter for the login flow.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 60 requests
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address. Use [`proxied_layer`] when the service sits
/// behind a reverse proxy and the peer address is the proxy itself.
///
/// # Example
///
/// ```rust,ignore
/// let app = web::routes::routes()
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(60)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates the rate limiter for deployments behind a trusted reverse proxy.
///
/// Same limits as [`layer`], but the client IP is read from
/// `X-Forwarded-For` / `X-Real-IP` / `Forwarded` headers, falling back to
/// the peer address. Only enable this when those headers are set by a proxy
/// you control; otherwise clients can spoof their rate limiting key.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(60)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
