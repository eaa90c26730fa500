//! Destination page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the page accepted logins land on.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

/// Renders the destination page.
///
/// # Endpoint
///
/// `GET /home`
///
/// This path is the default `DESTINATION_PATH`; deployments that point the
/// redirect elsewhere (a static file, a path on another vhost) simply never
/// send anyone here.
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
