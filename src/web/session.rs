//! Per-request access to the authorization flag stored in the session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::error::AppError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "robot_session";

/// Session key holding the authorization flag.
pub const AUTHORIZED_KEY: &str = "authorized";

/// Builds the session layer backed by an in-process store.
///
/// Sessions expire after `idle_minutes` without a request.
pub fn session_layer(secure: bool, idle_minutes: i64) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(idle_minutes)))
}

/// The authorization gate of the current request's session.
///
/// Extracted from requests passing through [`session_layer`]. Absence of the
/// flag means "not authorized".
#[derive(Debug, Clone)]
pub struct SessionGate {
    session: Session,
}

impl SessionGate {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Returns whether this session has passed the password check.
    pub async fn is_authorized(&self) -> Result<bool, AppError> {
        Ok(self
            .session
            .get::<bool>(AUTHORIZED_KEY)
            .await?
            .unwrap_or(false))
    }

    /// Marks the session as authorized.
    ///
    /// The session id is rotated first so an id planted before login cannot
    /// be reused afterwards.
    pub async fn authorize(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(AUTHORIZED_KEY, true).await?;
        Ok(())
    }

    /// Deletes the session and everything stored in it.
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for SessionGate
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self::new(session))
    }
}
