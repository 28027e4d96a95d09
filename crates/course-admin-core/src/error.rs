//! Error Types
//!
//! One error enum for everything the admin core can fail at. Components
//! turn these into toasts; none of them is fatal.

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the REST transport, decoding and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// Request never produced a response (offline, CORS, DNS...).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    /// 2xx response whose envelope carried `success: false`.
    #[error("{message}")]
    Api { message: String },

    /// Body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Detail lookup for an id the backend does not know.
    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },

    /// Local validation blocked the operation before any request.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    /// Text shown in the error toast.
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Network(_) => "Could not reach the server. Check your connection and retry.".to_string(),
            AdminError::Http { status, message } if message.is_empty() => {
                format!("Request failed ({})", status)
            }
            AdminError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::NotFound { .. } | AdminError::Http { status: 404, .. })
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Decode(err.to_string())
    }
}

impl From<ValidationErrors> for AdminError {
    fn from(errors: ValidationErrors) -> Self {
        AdminError::Validation(errors)
    }
}

/// Form tab a field lives on, used to move focus to the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormSection {
    Details,
    Options,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub section: FormSection,
    pub message: String,
}

/// Ordered list of field errors; order is form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, section: FormSection, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            section,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message for a field, if it failed
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    /// Section holding the first invalid field
    pub fn first_section(&self) -> Option<FormSection> {
        self.0.first().map(|e| e.section)
    }

    /// `Ok(())` when empty, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}
