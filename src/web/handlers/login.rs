//! Login page template and password submission handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State, rejection::FormRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::logout::logout;
use super::page::PageQuery;
use super::view::View;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::session::SessionGate;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Password input form
/// - Inline error message after a rejected attempt
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Login form body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: Option<String>,
}

/// Handles a password submission.
///
/// # Endpoint
///
/// `POST /` with form field `password`
///
/// # Behavior
///
/// - `?logout` in the query wins over the form and destroys the session,
///   whatever the body looks like
/// - Matching password: session becomes authorized, dashboard is rendered
/// - Wrong password: login form with `Password errata!`, session untouched
/// - No `password` field: current view without error
///
/// There is no lockout or attempt counting.
pub async fn login_handler(
    State(st): State<AppState>,
    gate: SessionGate,
    Query(query): Query<PageQuery>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    if query.wants_logout() {
        return logout(&gate).await;
    }

    let Form(form) = form?;

    let Some(password) = form.password else {
        return Ok(View::resolve(gate.is_authorized().await?, None).into_response());
    };

    if let Err(rejected) = st.auth_service.verify(&password) {
        tracing::warn!("Rejected control panel password");
        let error = rejected.to_string();
        return Ok(View::resolve(gate.is_authorized().await?, Some(error)).into_response());
    }

    gate.authorize().await?;
    tracing::info!("Control panel unlocked");
    Ok(View::Dashboard.into_response())
}
