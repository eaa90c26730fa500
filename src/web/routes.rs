//! Login flow route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, login_handler, submit_handler};
use axum::{Router, routing::get};

/// All pages of the login flow.
///
/// # Endpoints
///
/// - `GET  /`       - Login page (site root)
/// - `GET  /login`  - Login page
/// - `POST /login`  - Form submission gate
/// - `GET  /home`   - Destination page for accepted logins
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login_handler))
        .route("/login", get(login_handler).post(submit_handler))
        .route("/home", get(home_handler))
}
