//! Filter Select Component

use leptos::prelude::*;

use course_admin_core::resource::FilterSelect;
use course_admin_core::ViewAction;

#[component]
pub fn FilterSelectView(
    select: FilterSelect,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<ViewAction>,
) -> impl IntoView {
    let key = select.key;

    view! {
        <label class="filter-select">
            <span class="filter-label">{select.label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(ViewAction::set(key, event_target_value(&ev)))
            >
                {select
                    .options
                    .iter()
                    .map(|(option, label)| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {*label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
