//! Pagination Bar Component

use leptos::prelude::*;

use course_admin_core::pagination::Pager;

/// Prev / Next with "Page X of Y". Out-of-range pages are never requested;
/// the buttons are simply disabled.
#[component]
pub fn PaginationBar(
    #[prop(into)] pager: Signal<Option<Pager>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    move || {
        pager.get().map(|p| {
            let prev = p.prev_page();
            let next = p.next_page();
            view! {
                <nav class="pagination" aria-label="Pagination">
                    <span class="pagination-range">{p.range_label()}</span>
                    <button
                        class="page-btn"
                        disabled=move || p.prev_disabled() || busy.get()
                        on:click=move |_| {
                            if let Some(page) = prev {
                                on_page.run(page);
                            }
                        }
                    >
                        "Prev"
                    </button>
                    <span class="pagination-label">{p.label()}</span>
                    <button
                        class="page-btn"
                        disabled=move || p.next_disabled() || busy.get()
                        on:click=move |_| {
                            if let Some(page) = next {
                                on_page.run(page);
                            }
                        }
                    >
                        "Next"
                    </button>
                </nav>
            }
        })
    }
}
