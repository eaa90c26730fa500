//! Cross-cutting request processing middleware.

pub mod rate_limit;
pub mod tracing;
