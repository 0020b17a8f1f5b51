#![allow(dead_code)]

use axum::Router;
use axum_test::{TestResponse, TestServer};
use robot_control_center::application::services::AuthService;
use robot_control_center::routes::app_router;
use robot_control_center::state::AppState;
use robot_control_center::web::session::session_layer;
use std::sync::Arc;

pub const TEST_PASSWORD: &str = "robot2026";

pub const LOGIN_MARKER: &str = r#"name="password""#;
pub const DASHBOARD_MARKER: &str = r#"id="controlPanel""#;
pub const ERROR_MESSAGE: &str = "Password errata!";

pub fn static_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/static")
}

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(AuthService::new(TEST_PASSWORD)))
}

pub fn create_test_router() -> Router {
    app_router(create_test_state(), session_layer(false, 60), static_dir())
}

/// Test server that keeps cookies between requests, like a browser.
pub fn create_test_server() -> TestServer {
    TestServer::builder()
        .save_cookies()
        .build(create_test_router())
        .unwrap()
}

pub async fn submit_password(server: &TestServer, password: &str) -> TestResponse {
    server.post("/").form(&[("password", password)]).await
}

pub async fn login(server: &TestServer) -> TestResponse {
    let response = submit_password(server, TEST_PASSWORD).await;
    response.assert_status_ok();
    response
}

pub fn is_login_page(html: &str) -> bool {
    html.contains(LOGIN_MARKER) && !html.contains(DASHBOARD_MARKER)
}

pub fn is_dashboard(html: &str) -> bool {
    html.contains(DASHBOARD_MARKER) && !html.contains(LOGIN_MARKER)
}
