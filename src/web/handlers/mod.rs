//! Handlers and view rendering for the control panel page.

mod dashboard;
mod login;
mod logout;
mod page;
mod view;

pub use dashboard::DashboardTemplate;
pub use login::{LoginForm, LoginTemplate, login_handler};
pub use logout::logout;
pub use page::{PageQuery, page_handler};
pub use view::View;
