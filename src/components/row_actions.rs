//! Row Action Menu Component
//!
//! "⋯" menu per row with links and an inline delete confirmation.

use leptos::prelude::*;

use course_admin_core::actions::{MenuStage, RowMenu};

use crate::components::NavLink;

#[component]
pub fn RowActions(
    #[prop(into)] row_id: String,
    menu: RwSignal<RowMenu>,
    /// `(label, href)` pairs; the first is the row's own page
    links: Vec<(&'static str, String)>,
    #[prop(into)] on_confirm_delete: Callback<()>,
) -> impl IntoView {
    let id = StoredValue::new(row_id);
    let links = StoredValue::new(links);
    let stage = move || menu.with(|m| id.with_value(|id| m.stage(id)));

    view! {
        <div class="row-actions">
            <button
                class="menu-btn"
                aria-label="Row actions"
                disabled=move || menu.with(|m| m.is_busy())
                on:click=move |ev| {
                    ev.stop_propagation();
                    menu.update(|m| id.with_value(|id| m.toggle(id)));
                }
            >
                "⋯"
            </button>
            {move || match stage() {
                None => None,
                Some(MenuStage::Open) => Some(
                    view! {
                        <div class="row-menu" role="menu">
                            {links
                                .get_value()
                                .into_iter()
                                .map(|(label, href)| {
                                    view! {
                                        <NavLink href=href class="row-menu-item">
                                            {label}
                                        </NavLink>
                                    }
                                })
                                .collect_view()}
                            <button
                                class="row-menu-item danger"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    menu.update(|m| {
                                        id.with_value(|id| m.request_delete(id));
                                    });
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                    }
                    .into_any(),
                ),
                Some(MenuStage::Confirming) => Some(
                    view! {
                        <div class="row-menu delete-confirm">
                            <span class="delete-confirm-text">"Delete?"</span>
                            <button
                                class="confirm-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    on_confirm_delete.run(());
                                }
                            >
                                "✓"
                            </button>
                            <button
                                class="cancel-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    menu.update(|m| m.cancel_delete());
                                }
                            >
                                "✗"
                            </button>
                        </div>
                    }
                    .into_any(),
                ),
                Some(MenuStage::Deleting) => Some(
                    view! {
                        <div class="row-menu">
                            <span class="spinner small"></span>
                            " Deleting..."
                        </div>
                    }
                    .into_any(),
                ),
            }}
        </div>
    }
}
