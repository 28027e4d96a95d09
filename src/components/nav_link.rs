//! In-app link: a real `<a href>` that navigates through the History API.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let target = href.clone();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                // let modified clicks open a new tab as usual
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                ev.stop_propagation();
                ctx.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}
