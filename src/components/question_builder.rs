//! Question Builder Screen
//!
//! Author questions for one quiz: fill the form (Details and Options tabs),
//! append to the draft list, reorder by drag, then submit the whole list.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_listeners, create_dnd_signals, drop_index, make_on_item_mouseenter, make_on_mousedown,
    make_on_mouseleave, make_on_slot_mouseenter, DropTarget,
};
use wasm_bindgen::JsCast;

use course_admin_core::draft::{BuilderPhase, DraftId, QuestionBuilder, QuestionType, SubmitBlocked};
use course_admin_core::records::Quiz;
use course_admin_core::table::truncate;
use course_admin_core::FormSection;

use crate::commands;
use crate::components::NavLink;
use crate::config::app_config;
use crate::context::AppContext;

/// DOM id of the input behind a validation field name
fn field_dom_id(field: &str) -> String {
    match field.strip_prefix("options.") {
        Some(index) => format!("option-text-{}", index),
        None if field == "text" => "question-text".to_string(),
        None => "option-list".to_string(),
    }
}

/// Focus the first invalid input once its tab has rendered.
fn focus_field(field: String) {
    Timeout::new(0, move || {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&field_dom_id(&field)))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    })
    .forget();
}

#[component]
pub fn QuestionBuilderScreen(#[prop(into)] quiz_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let builder = RwSignal::new(QuestionBuilder::new(quiz_id.clone()));
    let quiz_title = RwSignal::new(None::<String>);

    let lookup = quiz_id.clone();
    spawn_local(async move {
        match commands::get::<Quiz>(&lookup).await {
            Ok(quiz) => {
                quiz_title.try_set(Some(quiz.title));
            }
            Err(err) if err.is_not_found() => ctx.toast_error(&format!("Quiz '{}' not found", lookup)),
            Err(err) => log::warn!("quiz lookup failed: {}", err),
        }
    });

    let option_dnd = create_dnd_signals::<DraftId>();
    let draft_dnd = create_dnd_signals::<DraftId>();
    let listeners = vec![
        bind_global_listeners(option_dnd, move |dragged, target| {
            builder.update(|b| {
                let order: Vec<DraftId> = b.form().options().iter().map(|o| o.id).collect();
                if let Some(to) = drop_index(&order, &dragged, target) {
                    b.form_mut().move_option(dragged, to);
                }
            });
        }),
        bind_global_listeners(draft_dnd, move |dragged, target| {
            builder.update(|b| {
                if let Some(to) = drop_index(b.drafts().ids(), &dragged, target) {
                    b.move_draft(dragged, to);
                }
            });
        }),
    ];
    // Removed from the document when the screen unmounts
    let _listeners = StoredValue::new_local(listeners);

    let submitting = Signal::derive(move || builder.with(|b| b.phase() == BuilderPhase::Submitting));
    let section = Signal::derive(move || builder.with(|b| b.form().section()));
    let field_error =
        move |field: String| builder.with(|b| b.form().errors().for_field(&field).map(str::to_string));

    let commit = move |_: web_sys::MouseEvent| {
        let result = builder.try_update(|b| b.commit_form());
        if let Some(Err(errors)) = result {
            if let Some(first) = errors.iter().next() {
                focus_field(first.field.clone());
            }
        }
    };

    let submit = move |_: web_sys::MouseEvent| {
        match builder.try_update(|b| b.begin_submit()) {
            None => {}
            Some(Err(blocked)) => {
                // open the offending draft on the tab that needs fixing
                if let SubmitBlocked::Invalid { id, .. } = &blocked {
                    let id = *id;
                    builder.update(|b| {
                        if b.edit_draft(id) {
                            let _ = b.form_mut().validate();
                        }
                    });
                }
                ctx.toast_error(&blocked.to_string());
            }
            Some(Ok(payload)) => {
                let toast = ctx.toast_loading(&format!("Saving {} questions...", payload.questions.len()));
                spawn_local(async move {
                    let result = commands::submit_questions(&payload).await;
                    builder.try_update(|b| b.finish_submit(&result));
                    match result {
                        Ok(response) => {
                            let message = if response.message.is_empty() {
                                format!("{} questions saved", payload.questions.len())
                            } else {
                                response.message
                            };
                            ctx.resolve_success(toast, &message);
                            ctx.navigate(&format!("/questions?quizId={}", payload.quiz_id));
                        }
                        Err(err) => ctx.resolve_error(toast, &err.user_message()),
                    }
                });
            }
        }
    };

    let tab = move |target: FormSection, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || if section.get() == target { "tab active" } else { "tab" }
                on:click=move |_| builder.update(|b| b.form_mut().set_section(target))
            >
                {label}
            </button>
        }
    };

    let details_tab = move || {
        view! {
            <div class="form-tab">
                <label for="question-text">"Question"</label>
                <textarea
                    id="question-text"
                    rows="3"
                    prop:value=move || builder.with(|b| b.form().text().to_string())
                    on:input=move |ev| builder.update(|b| b.form_mut().set_text(&event_target_value(&ev)))
                ></textarea>
                {move || field_error("text".into()).map(|msg| view! { <p class="field-error">{msg}</p> })}
                <label for="question-type">"Type"</label>
                <select
                    id="question-type"
                    on:change=move |ev| {
                        if let Some(t) = QuestionType::parse(&event_target_value(&ev)) {
                            builder.update(|b| b.set_question_type(t));
                        }
                    }
                >
                    {QuestionType::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <option
                                    value=t.as_str()
                                    selected=move || builder.with(|b| b.form().question_type() == t)
                                >
                                    {t.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        }
    };

    let option_row = move |id: DraftId| {
        let index = move || builder.with(|b| b.form().options().iter().position(|o| o.id == id));
        let fixed = move || builder.with(|b| b.form().question_type().fixed_options());
        let text = move || {
            builder.with(|b| {
                b.form()
                    .options()
                    .iter()
                    .find(|o| o.id == id)
                    .map(|o| o.text.clone())
                    .unwrap_or_default()
            })
        };
        view! {
            <li
                class="option-row"
                class:dragging=move || option_dnd.is_dragging(id)
                class:drop-target=move || option_dnd.is_target(DropTarget::Item(id))
                on:mousedown=make_on_mousedown(option_dnd, id)
                on:mouseenter=make_on_item_mouseenter(option_dnd, id)
                on:mouseleave=make_on_mouseleave(option_dnd)
            >
                <span class="drag-handle" title="Drag to reorder">"⠿"</span>
                <input
                    type="radio"
                    name="correct-option"
                    title="Correct answer"
                    prop:checked=move || builder.with(|b| b.form().correct() == Some(id))
                    on:change=move |_| {
                        builder.update(|b| {
                            b.form_mut().set_correct(id);
                        });
                    }
                />
                <input
                    type="text"
                    id=move || format!("option-text-{}", index().unwrap_or_default())
                    placeholder=move || format!("Option {}", index().unwrap_or_default() + 1)
                    prop:value=text
                    disabled=fixed
                    on:input=move |ev| {
                        builder.update(|b| {
                            b.form_mut().set_option_text(id, &event_target_value(&ev));
                        });
                    }
                />
                <button
                    type="button"
                    title="Move up"
                    disabled=move || index() == Some(0)
                    on:click=move |_| {
                        builder.update(|b| {
                            b.form_mut().shift_option(id, -1);
                        });
                    }
                >
                    "↑"
                </button>
                <button
                    type="button"
                    title="Move down"
                    disabled=move || {
                        builder.with(|b| b.form().options().last().map(|o| o.id) == Some(id))
                    }
                    on:click=move |_| {
                        builder.update(|b| {
                            b.form_mut().shift_option(id, 1);
                        });
                    }
                >
                    "↓"
                </button>
                <button
                    type="button"
                    class="remove-btn"
                    title="Remove option"
                    disabled=move || !builder.with(|b| b.form().can_remove_option())
                    on:click=move |_| {
                        builder.update(|b| {
                            b.form_mut().remove_option(id);
                        });
                    }
                >
                    "×"
                </button>
                {move || {
                    index()
                        .and_then(|i| field_error(format!("options.{}", i)))
                        .map(|msg| view! { <p class="field-error">{msg}</p> })
                }}
            </li>
        }
    };

    let options_tab = move || {
        view! {
            <div class="form-tab">
                <ul id="option-list" class="option-list" tabindex="-1">
                    <For
                        each=move || builder.with(|b| b.form().options().iter().map(|o| o.id).collect::<Vec<_>>())
                        key=|id| *id
                        children=option_row
                    />
                    <li
                        class="option-slot"
                        class:drop-target=move || {
                            let end = builder.with(|b| b.form().options().len());
                            option_dnd.is_target(DropTarget::Slot(end))
                        }
                        on:mouseenter=move |ev| {
                            let end = builder.with_untracked(|b| b.form().options().len());
                            make_on_slot_mouseenter(option_dnd, end)(ev)
                        }
                    ></li>
                </ul>
                {move || field_error("correctOption".into()).map(|msg| view! { <p class="field-error">{msg}</p> })}
                {move || field_error("options".into()).map(|msg| view! { <p class="field-error">{msg}</p> })}
                <button
                    type="button"
                    class="add-option-btn"
                    disabled=move || !builder.with(|b| b.form().can_add_option())
                    on:click=move |_| {
                        builder.update(|b| {
                            b.add_option();
                        });
                    }
                >
                    "+ Add option"
                </button>
            </div>
        }
    };

    let keep = app_config().truncate_keep;
    let threshold = app_config().description_truncate_at;
    let draft_row = move |id: DraftId| {
        let draft = move || builder.with(|b| b.drafts().get(id).cloned());
        view! {
            <li
                class="draft-row"
                class:editing=move || builder.with(|b| b.form().editing() == Some(id))
                class:dragging=move || draft_dnd.is_dragging(id)
                class:drop-target=move || draft_dnd.is_target(DropTarget::Item(id))
                on:mousedown=make_on_mousedown(draft_dnd, id)
                on:mouseenter=make_on_item_mouseenter(draft_dnd, id)
                on:mouseleave=make_on_mouseleave(draft_dnd)
            >
                {move || {
                    draft()
                        .map(|d| {
                            let summary = truncate(&d.text, threshold, keep).display_text();
                            let answer = d.correct_option().map(|o| o.text.clone()).unwrap_or_default();
                            view! {
                                <span class="draft-order">{d.order}"."</span>
                                <span class="draft-text" title=d.text.clone()>{summary}</span>
                                <span class="draft-type">{d.question_type.label()}</span>
                                <span class="draft-answer">{answer}</span>
                            }
                        })
                }}
                <button
                    type="button"
                    disabled=move || submitting.get()
                    on:click=move |_| {
                        builder.update(|b| {
                            b.edit_draft(id);
                        });
                    }
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="remove-btn"
                    disabled=move || submitting.get()
                    on:click=move |_| {
                        builder.update(|b| {
                            b.remove_draft(id);
                        });
                    }
                >
                    "Remove"
                </button>
            </li>
        }
    };

    let back_href = format!("/quizzes/{}", quiz_id);

    view! {
        <section class="question-builder">
            <header class="list-header">
                <NavLink href=back_href class="back-link">
                    "Back to quiz"
                </NavLink>
                <h1>
                    "Add questions"
                    {move || quiz_title.get().map(|t| format!(" to {}", t))}
                </h1>
            </header>

            <div class="builder-layout">
                <form class="question-form" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
                    <div class="tabs">
                        {tab(FormSection::Details, "Details")}
                        {tab(FormSection::Options, "Options")}
                    </div>
                    {move || match section.get() {
                        FormSection::Details => details_tab().into_any(),
                        FormSection::Options => options_tab().into_any(),
                    }}
                    <div class="form-actions">
                        <Show when=move || builder.with(|b| b.form().editing().is_some())>
                            <button type="button" class="cancel-btn" on:click=move |_| builder.update(|b| b.reset_form())>
                                "Cancel edit"
                            </button>
                        </Show>
                        <button type="button" class="primary" disabled=move || submitting.get() on:click=commit>
                            {move || {
                                if builder.with(|b| b.form().editing().is_some()) {
                                    "Save question"
                                } else {
                                    "Add question"
                                }
                            }}
                        </button>
                    </div>
                </form>

                <aside class="draft-panel">
                    <h2>{move || format!("Questions ({})", builder.with(|b| b.drafts().len()))}</h2>
                    <Show
                        when=move || builder.with(|b| b.phase() != BuilderPhase::Empty)
                        fallback=|| view! { <p class="draft-empty">"No questions added yet"</p> }
                    >
                        <ol class="draft-list">
                            <For
                                each=move || builder.with(|b| b.drafts().ids().to_vec())
                                key=|id| *id
                                children=draft_row
                            />
                            <li
                                class="draft-slot"
                                class:drop-target=move || {
                                    let end = builder.with(|b| b.drafts().len());
                                    draft_dnd.is_target(DropTarget::Slot(end))
                                }
                                on:mouseenter=move |ev| {
                                    let end = builder.with_untracked(|b| b.drafts().len());
                                    make_on_slot_mouseenter(draft_dnd, end)(ev)
                                }
                            ></li>
                        </ol>
                    </Show>
                    <button
                        type="button"
                        class="primary submit-all"
                        disabled=move || submitting.get() || builder.with(|b| b.drafts().is_empty())
                        on:click=submit
                    >
                        {move || if submitting.get() { "Submitting..." } else { "Submit all" }}
                    </button>
                </aside>
            </div>
        </section>
    }
}
