//! Page handler.

use std::collections::HashMap;

use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::logout::logout;
use super::view::View;
use crate::error::AppError;
use crate::web::session::SessionGate;

/// Query parameters accepted by the page.
///
/// Kept as a plain map so repeated or unknown keys never reject the request.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct PageQuery(HashMap<String, String>);

impl PageQuery {
    /// Whether `logout` is present, whatever its value (including empty).
    pub fn wants_logout(&self) -> bool {
        self.0.contains_key("logout")
    }
}

/// Renders the page for the current session.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// `templates/dashboard.html` when the session is authorized,
/// `templates/login.html` otherwise.
pub async fn page_handler(
    gate: SessionGate,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    if query.wants_logout() {
        return logout(&gate).await;
    }

    Ok(View::resolve(gate.is_authorized().await?, None).into_response())
}
