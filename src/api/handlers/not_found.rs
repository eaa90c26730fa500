//! Fallback handler for unmatched routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Returns a structured 404 for any path with no matching route.
///
/// # Endpoint
///
/// Registered as the router fallback; matches everything the explicit
/// routes do not.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Resource not found", json!({ "path": uri.path() }))
}
