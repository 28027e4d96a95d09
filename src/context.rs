//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use course_admin_core::toast::{ToastCenter, ToastId};
use course_admin_core::{QueryStore, ViewAction};

use crate::url_state::{BrowserPersistence, Location};

/// Milliseconds since the epoch, the clock every core state machine takes
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub location: Location,
    pub toasts: RwSignal<ToastCenter>,
    /// Bumped when something outside a list changed its data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped when something outside a list changed its data - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(location: Location, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            location,
            toasts: RwSignal::new(ToastCenter::new()),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the visible list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, href: &str) {
        self.location.navigate(href);
    }

    /// Run a list-state transition against the URL.
    pub fn dispatch(&self, action: ViewAction) -> bool {
        QueryStore::new(BrowserPersistence::new(self.location)).dispatch(&action)
    }

    pub fn toast_loading(&self, message: &str) -> Option<ToastId> {
        self.toasts.try_update(|t| t.loading(message, now_ms()))
    }

    pub fn toast_success(&self, message: &str) {
        self.toasts.update(|t| {
            t.success(message, now_ms());
        });
    }

    pub fn toast_error(&self, message: &str) {
        self.toasts.update(|t| {
            t.error(message, now_ms());
        });
    }

    /// Replace a loading toast, or show a fresh one if there was none.
    pub fn resolve_success(&self, id: Option<ToastId>, message: &str) {
        match id {
            Some(id) => self.toasts.update(|t| {
                t.resolve_success(id, message, now_ms());
            }),
            None => self.toast_success(message),
        }
    }

    pub fn resolve_error(&self, id: Option<ToastId>, message: &str) {
        match id {
            Some(id) => self.toasts.update(|t| {
                t.resolve_error(id, message, now_ms());
            }),
            None => self.toast_error(message),
        }
    }

    pub fn dismiss_toast(&self, id: ToastId) {
        self.toasts.update(|t| {
            t.dismiss(id);
        });
    }
}
