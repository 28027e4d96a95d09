//! Not-found panel, shown instead of a blank screen.

use leptos::prelude::*;

use crate::components::NavLink;

#[component]
pub fn NotFoundPanel(
    #[prop(into)] message: String,
    #[prop(into)] back_href: String,
    #[prop(into)] back_label: String,
) -> impl IntoView {
    view! {
        <div class="not-found-panel" role="alert">
            <h2>"Not found"</h2>
            <p>{message}</p>
            <NavLink href=back_href class="back-link">
                {back_label}
            </NavLink>
        </div>
    }
}
