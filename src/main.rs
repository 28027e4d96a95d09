//! Course Admin Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logging;
mod routes;
mod session;
mod url_state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let built = config::build();
    let capacity = built
        .as_ref()
        .map(|c| c.log_capacity)
        .unwrap_or_else(|_| course_admin_core::AdminConfig::default().log_capacity);
    logging::init(capacity);
    match built {
        Ok(config) => {
            rolling_logger::info(&format!("api at {}", config.api_base_url));
            if !config::install(config) {
                rolling_logger::error("build config was not installed");
            }
        }
        Err(e) => rolling_logger::error(&format!("invalid build config, using defaults: {}", e)),
    }

    mount_to_body(App);
}
