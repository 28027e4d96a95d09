//! Dashboard Configuration
//!
//! All fields are defaulted so a partial JSON document (or none) is enough.

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, AdminResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminConfig {
    /// Base URL of the REST API, without trailing slash
    pub api_base_url: String,
    /// Default page size for list screens
    pub page_limit: u32,
    /// Quiescence window before a search commits
    pub search_debounce_ms: u64,
    pub name_truncate_at: usize,
    pub description_truncate_at: usize,
    /// Characters kept when a cell is truncated, whichever threshold fired
    pub truncate_keep: usize,
    pub toast_timeout_ms: u64,
    /// Offset applied when splitting timestamps into date/time lines
    pub utc_offset_minutes: i32,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api/v1".to_string(),
            page_limit: 10,
            search_debounce_ms: 500,
            name_truncate_at: 30,
            description_truncate_at: 50,
            truncate_keep: 16,
            toast_timeout_ms: 4000,
            utc_offset_minutes: 0,
            log_capacity: 500,
        }
    }
}

impl AdminConfig {
    pub fn from_json(json: &str) -> AdminResult<Self> {
        let config: AdminConfig =
            serde_json::from_str(json).map_err(|e| AdminError::Config(e.to_string()))?;
        config.validate()
    }

    /// Override the base URL, dropping any trailing slash.
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn validate(mut self) -> AdminResult<Self> {
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        if self.api_base_url.is_empty() {
            return Err(AdminError::Config("apiBaseUrl must not be empty".into()));
        }
        if self.page_limit == 0 {
            return Err(AdminError::Config("pageLimit must be at least 1".into()));
        }
        if self.truncate_keep > self.name_truncate_at.min(self.description_truncate_at) {
            return Err(AdminError::Config(
                "truncateKeep must not exceed either truncation threshold".into(),
            ));
        }
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(AdminError::Config("utcOffsetMinutes out of range".into()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AdminConfig::from_json(r#"{"apiBaseUrl":"https://api.example.com/v1/","pageLimit":25}"#)
            .expect("valid config");
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(config.page_limit, 25);
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.truncate_keep, 16);
    }

    #[test]
    fn test_rejects_zero_limit() {
        let err = AdminConfig::from_json(r#"{"pageLimit":0}"#).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }

    #[test]
    fn test_rejects_keep_longer_than_threshold() {
        let err = AdminConfig::from_json(r#"{"truncateKeep":40}"#).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }
}
