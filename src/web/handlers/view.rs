//! Selection of the page view from the session flag.

use axum::response::{IntoResponse, Response};

use super::dashboard::DashboardTemplate;
use super::login::LoginTemplate;

/// The two faces of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login { error: Option<String> },
    Dashboard,
}

impl View {
    /// Picks the view for a session.
    ///
    /// Only the flag decides: an authorized session always gets the dashboard,
    /// and `error` is shown only on the login form.
    pub fn resolve(authorized: bool, error: Option<String>) -> Self {
        if authorized {
            View::Dashboard
        } else {
            View::Login { error }
        }
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        match self {
            View::Login { error } => LoginTemplate { error }.into_response(),
            View::Dashboard => DashboardTemplate::default().into_response(),
        }
    }
}
