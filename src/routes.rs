//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Login form or dashboard, `?logout=1` ends the session
//! - `POST /`          - Password submission
//! - `/static/*`       - Stylesheet and client script
//!
//! # Middleware
//!
//! - **Sessions** - Cookie-keyed in-memory session store
//! - **Tracing** - Structured request/response logging

use crate::state::AppState;
use crate::web;
use crate::web::middleware::tracing;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `sessions` - session layer, see [`crate::web::session::session_layer`]
/// - `static_dir` - directory served under `/static`
pub fn app_router(
    state: AppState,
    sessions: SessionManagerLayer<MemoryStore>,
    static_dir: impl AsRef<Path>,
) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(sessions)
        .layer(tracing::layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::AuthService;
    use crate::web::session::session_layer;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        let state = AppState::new(Arc::new(AuthService::new("robot2026")));
        let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static");
        app_router(state, session_layer(false, 60), static_dir)
    }

    #[tokio::test]
    async fn test_page_served_as_html() {
        let response = router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_anonymous_page_sets_no_cookie() {
        let response = router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_static_assets_served() {
        for path in ["/static/control.js", "/static/style.css"] {
            let response = router()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_not_found() {
        let response = router()
            .oneshot(Request::get("/index.php").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
