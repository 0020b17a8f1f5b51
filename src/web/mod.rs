//! Web layer for the browser-based control panel.
//!
//! Serves a single page at `/` whose content depends on the session flag:
//! a login form for anonymous visitors, the command dashboard once the shared
//! password has been accepted. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page, login and logout handlers plus view rendering
//! - [`middleware`] - Request tracing
//! - [`routes`] - Page route configuration
//! - [`session`] - Session flag access and session store layer

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
