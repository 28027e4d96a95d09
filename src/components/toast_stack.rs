//! Toast Stack Component

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use course_admin_core::toast::ToastKind;

use crate::config::app_config;
use crate::context::{now_ms, AppContext};

const SWEEP_INTERVAL_MS: u32 = 250;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let timeout = app_config().toast_timeout_ms;

    let sweep = Interval::new(SWEEP_INTERVAL_MS, move || {
        ctx.toasts.maybe_update(|t| t.expire(now_ms(), timeout) > 0);
    });
    // Dropped (and stopped) with the component
    let _sweep = StoredValue::new_local(sweep);

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || ctx.toasts.with(|t| t.toasts().to_vec())
                key=|toast| (toast.id, toast.kind, toast.message.clone())
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Loading => "toast toast-loading",
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            {(toast.kind == ToastKind::Loading).then(|| view! { <span class="spinner small"></span> })}
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" aria-label="Dismiss" on:click=move |_| ctx.dismiss_toast(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
