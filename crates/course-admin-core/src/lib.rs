//! Headless core of the course admin dashboard.
//!
//! Everything here runs natively so it can be tested without a browser;
//! the Leptos app wires it to signals, timers and the History API.

pub mod actions;
pub mod api;
pub mod category_form;
pub mod config;
pub mod debounce;
pub mod draft;
pub mod error;
pub mod fetch;
pub mod pagination;
pub mod query;
pub mod records;
pub mod resource;
pub mod table;
pub mod toast;
pub mod view_state;

pub use api::{Api, HttpTransport, MessageResponse, Page, Transport};
pub use config::AdminConfig;
pub use error::{AdminError, AdminResult, FieldError, FormSection, ValidationErrors};
pub use fetch::{Collection, LoadOutcome, RequestTicket};
pub use query::ListQuery;
pub use resource::Resource;
pub use view_state::{Navigation, QueryPersistence, QueryStore, ScrollBehavior, ViewAction, ViewState};
