//! Navigation Sidebar

use leptos::prelude::*;

use crate::components::NavLink;
use crate::context::AppContext;
use crate::routes::{ResourceKind, Route};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let active = Memo::new(move |_| Route::parse(&ctx.location.path.get()).section());

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"Course Admin"</div>
            <ul>
                {ResourceKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <li class:active=move || active.get() == Some(kind)>
                                <NavLink href=kind.list_path()>{kind.nav_label()}</NavLink>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
