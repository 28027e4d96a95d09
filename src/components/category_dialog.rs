//! Category Quick-Create Dialog

use leptos::prelude::*;
use leptos::task::spawn_local;

use course_admin_core::category_form::CategoryForm;
use course_admin_core::{AdminError, ValidationErrors};

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn CategoryDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let open = RwSignal::new(false);
    let form = RwSignal::new(CategoryForm::default());
    let errors = RwSignal::new(ValidationErrors::new());
    let saving = RwSignal::new(false);

    let close = move || {
        open.set(false);
        form.set(CategoryForm::default());
        errors.set(ValidationErrors::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        // Invalid input never leaves the browser
        if let Err(invalid) = current.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(ValidationErrors::new());
        saving.set(true);
        let toast = ctx.toast_loading("Creating category...");

        spawn_local(async move {
            let result = commands::create_category(&current).await;
            saving.try_set(false);
            match result {
                Ok(response) => {
                    let message = if response.message.is_empty() {
                        "Category created".to_string()
                    } else {
                        response.message
                    };
                    ctx.resolve_success(toast, &message);
                    open.try_set(false);
                    form.try_set(CategoryForm::default());
                    ctx.reload();
                }
                Err(AdminError::Validation(invalid)) => {
                    if let Some(id) = toast {
                        ctx.dismiss_toast(id);
                    }
                    errors.try_set(invalid);
                }
                Err(err) => ctx.resolve_error(toast, &err.user_message()),
            }
        });
    };

    let field_error = move |field: &'static str| errors.with(|e| e.for_field(field).map(str::to_string));

    view! {
        <button class="toolbar-btn primary" on:click=move |_| open.set(true)>
            "New category"
        </button>
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <form
                    class="modal category-dialog"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=on_submit
                >
                    <h2>"New category"</h2>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    {move || field_error("name").map(|msg| view! { <p class="field-error">{msg}</p> })}
                    <label>
                        "Description"
                        <textarea
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
