//! Diagnostics Drawer
//!
//! Recent log lines from the rolling logger, for support screenshots.

use leptos::prelude::*;
use log::Level;

#[component]
pub fn DiagnosticsDrawer() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::new());

    let refresh = move || set_lines.set(rolling_logger::recent_lines());

    view! {
        <div class="diagnostics">
            <button
                class="diagnostics-toggle"
                on:click=move |_| {
                    if !open.get_untracked() {
                        refresh();
                    }
                    set_open.update(|o| *o = !*o);
                }
            >
                "Diagnostics"
            </button>
            <Show when=move || open.get()>
                <aside class="diagnostics-drawer">
                    <div class="diagnostics-actions">
                        <button on:click=move |_| refresh()>"Refresh"</button>
                        <button on:click=move |_| set_open.set(false)>"Close"</button>
                    </div>
                    <pre class="diagnostics-log">
                        {move || {
                            lines
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    let class = match entry.level {
                                        Level::Error => "log-line log-error",
                                        Level::Warn => "log-line log-warn",
                                        _ => "log-line",
                                    };
                                    view! { <div class=class>{entry.line}</div> }
                                })
                                .collect_view()
                        }}
                    </pre>
                </aside>
            </Show>
        </div>
    }
}
