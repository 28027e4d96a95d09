//! App Configuration
//!
//! Compile-time environment over `AdminConfig` defaults.

use std::sync::OnceLock;

use course_admin_core::{AdminConfig, AdminResult};

static CONFIG: OnceLock<AdminConfig> = OnceLock::new();

/// Build from `ADMIN_API_BASE_URL` / `ADMIN_PAGE_LIMIT` if they were set
/// when the bundle was compiled.
pub fn build() -> AdminResult<AdminConfig> {
    let mut config = AdminConfig::default();
    if let Some(url) = option_env!("ADMIN_API_BASE_URL") {
        config = config.with_api_base_url(url);
    }
    if let Some(limit) = option_env!("ADMIN_PAGE_LIMIT").and_then(|v| v.parse().ok()) {
        config.page_limit = limit;
    }
    config.validate()
}

/// Set `cell` once. Fails when it was already set, typically because
/// `app_config()` ran first and locked in the defaults.
fn install_into(cell: &OnceLock<AdminConfig>, config: AdminConfig) -> bool {
    match cell.set(config) {
        Ok(()) => true,
        Err(rejected) => {
            log::error!(
                "config read before install; ignoring built config for {}",
                rejected.api_base_url
            );
            false
        }
    }
}

pub fn install(config: AdminConfig) -> bool {
    install_into(&CONFIG, config)
}

pub fn app_config() -> &'static AdminConfig {
    CONFIG.get_or_init(AdminConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_after_read_keeps_first_config() {
        let cell = OnceLock::new();
        let _ = cell.get_or_init(AdminConfig::default);

        let built = AdminConfig::default().with_api_base_url("https://admin.example.com/api");
        assert!(!install_into(&cell, built));
        assert_eq!(cell.get().map(|c| c.api_base_url.as_str()), Some("http://localhost:5000/api/v1"));
    }

    #[test]
    fn test_install_into_empty_cell() {
        let cell = OnceLock::new();
        let built = AdminConfig::default().with_api_base_url("https://admin.example.com/api/");
        assert!(install_into(&cell, built));
        assert_eq!(cell.get().map(|c| c.api_base_url.as_str()), Some("https://admin.example.com/api"));
    }
}
