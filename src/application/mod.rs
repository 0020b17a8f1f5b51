//! Application layer services.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Shared password verification

pub mod services;
