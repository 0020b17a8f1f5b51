//! Session teardown.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::web::session::SessionGate;

/// Destroys the session and sends the browser back to the bare page.
///
/// Always answers `302 Found` with `Location: /`, whether or not the session
/// was authorized.
pub async fn logout(gate: &SessionGate) -> Result<Response, AppError> {
    gate.destroy().await?;
    tracing::info!("Session destroyed on logout");

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}
