//! REST Command Wrappers
//!
//! Frontend bindings to backend endpoints, organized by domain. Every call
//! builds a fresh client so a token stored after sign-in is picked up.

mod categories;
mod questions;
mod resources;

use course_admin_core::{Api, HttpTransport};

use crate::config::app_config;
use crate::session;

pub fn api() -> Api<HttpTransport> {
    Api::new(HttpTransport::new(&app_config().api_base_url, session::access_token()))
}

// Re-export all public items
pub use categories::*;
pub use questions::*;
pub use resources::*;
