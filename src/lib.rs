//! # Robot Control Center
//!
//! A password-gated web control panel for a remote robot, built with Axum.
//!
//! The service renders one page. Anonymous visitors get a login form; once the
//! shared password is accepted the session is flagged as authorized and the
//! page shows a directional command pad next to a map placeholder. Commands
//! only update an on-screen status label: no robot transport exists yet.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Command model
//! - **Application Layer** ([`application`]) - Password verification
//! - **Web Layer** ([`web`]) - Page handlers, templates and session gate
//!
//! ## Quick Start
//!
//! ```bash
//! export ROBOT_PASSWORD="robot2026"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::AuthService;
    pub use crate::domain::Command;
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
    pub use crate::web::session::session_layer;
}
