//! Command dashboard template.

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::{Command, FEEDBACK_DELAY, IDLE_STATUS};

/// Template for the control dashboard.
///
/// Renders `templates/dashboard.html` with:
/// - One button per command, carrying its key binding and status texts
/// - The map placeholder
/// - The status label and the logout link
///
/// The client script reads everything it needs from the rendered attributes.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub commands: &'static [Command],
    pub feedback_delay_ms: u128,
    pub idle_status: &'static str,
}

impl Default for DashboardTemplate {
    fn default() -> Self {
        Self {
            commands: &Command::ALL,
            feedback_delay_ms: FEEDBACK_DELAY.as_millis(),
            idle_status: IDLE_STATUS,
        }
    }
}
