mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use login_gate::web::handlers::home_handler;

#[tokio::test]
async fn test_home_page_renders() {
    let app = Router::new().route("/home", get(home_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/home").await;

    response.assert_status_ok();
    assert!(response.text().contains("You are signed in."));
}
