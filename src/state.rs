//! Shared state injected into request handlers.

use std::sync::Arc;

use crate::application::services::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }
}
