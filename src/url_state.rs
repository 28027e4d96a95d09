//! Browser URL Binding
//!
//! The address bar is the source of truth for list view state. `Location`
//! mirrors path and query into signals; `BrowserPersistence` is the
//! `QueryPersistence` that writes through the History API.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use course_admin_core::{Navigation, QueryPersistence, ScrollBehavior};

fn window_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn window_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|s| s.trim_start_matches('?').to_string())
        .unwrap_or_default()
}

fn push_url(url: &str) {
    let Some(win) = web_sys::window() else { return };
    match win.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
                log::warn!("pushState failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("no history: {:?}", e),
    }
}

fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Path and query of the current URL as signals
#[derive(Clone, Copy)]
pub struct Location {
    pub path: ReadSignal<String>,
    set_path: WriteSignal<String>,
    pub query: ReadSignal<String>,
    set_query: WriteSignal<String>,
}

impl Location {
    pub fn from_window() -> Self {
        let (path, set_path) = signal(window_path());
        let (query, set_query) = signal(window_query());
        Self { path, set_path, query, set_query }
    }

    /// Go to another screen. `href` may carry its own query string.
    pub fn navigate(&self, href: &str) {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        log::debug!("navigate {}", href);
        push_url(href);
        self.set_path.set(path.to_string());
        self.set_query.set(query.to_string());
        scroll_to_top();
    }

    /// Follow back/forward buttons for the lifetime of the app.
    pub fn listen_popstate(&self) {
        let set_path = self.set_path;
        let set_query = self.set_query;
        let on_popstate = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
            set_path.set(window_path());
            set_query.set(window_query());
        });
        if let Some(win) = web_sys::window() {
            let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        on_popstate.forget();
    }
}

/// History API persistence for `QueryStore`
pub struct BrowserPersistence {
    location: Location,
}

impl BrowserPersistence {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl QueryPersistence for BrowserPersistence {
    fn current(&self) -> String {
        self.location.query.get_untracked()
    }

    fn commit(&mut self, navigation: &Navigation) {
        let path = self.location.path.get_untracked();
        let url = if navigation.query.is_empty() {
            path
        } else {
            format!("{}?{}", path, navigation.query)
        };
        push_url(&url);
        self.location.set_query.set(navigation.query.clone());
        if navigation.scroll == ScrollBehavior::Top {
            scroll_to_top();
        }
    }
}
