//! Debounced Search Input Component
//!
//! The box shows every keystroke at once; the query string only changes
//! after the configured quiet period.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use course_admin_core::debounce::DebouncedBinding;
use course_admin_core::query::SEARCH_KEY;
use course_admin_core::ViewAction;

use crate::config::app_config;
use crate::context::now_ms;

#[component]
pub fn SearchInput(
    /// Committed value, as read from the URL
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(into)] on_commit: Callback<ViewAction>,
    #[prop(default = SEARCH_KEY)] key: &'static str,
    #[prop(default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    let delay = app_config().search_debounce_ms;
    let initial = value.get_untracked().unwrap_or_default();
    let binding = RwSignal::new(DebouncedBinding::new(key, &initial, delay));
    // Replacing the handle drops the previous Timeout, which cancels it
    let timer = StoredValue::new_local(None::<Timeout>);

    // Back/forward and "clear filters" change the URL under us
    Effect::new(move |_| {
        let committed = value.get();
        binding.update(|b| b.sync_from_query(committed.as_deref()));
    });

    on_cleanup(move || {
        binding.try_update_untracked(|b| b.cancel());
        timer.try_update_value(|t| {
            t.take();
        });
    });

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        binding.update(|b| {
            b.on_input(&text, now_ms());
        });
        let handle = Timeout::new(delay as u32, move || {
            if let Some(Some(action)) = binding.try_update(|b| b.fire_elapsed()) {
                on_commit.run(action);
            }
        });
        timer.set_value(Some(handle));
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || binding.with(|b| b.input_value().to_string())
                on:input=on_input
            />
        </div>
    }
}
