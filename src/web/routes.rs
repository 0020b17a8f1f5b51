//! Control panel route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_handler, page_handler};
use axum::{Router, routing::get};

/// Page routes.
///
/// Both views share one URL; which one is rendered depends on the session.
///
/// # Endpoints
///
/// - `GET /` - Login form or dashboard; `?logout=<any>` destroys the session
/// - `POST /` - Password submission (`application/x-www-form-urlencoded`)
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(page_handler).post(login_handler))
}
