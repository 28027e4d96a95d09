//! Record Detail Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use course_admin_core::resource::capitalize;
use course_admin_core::table::CellFormat;
use course_admin_core::{AdminResult, Resource};

use crate::commands;
use crate::components::{CellView, NavLink, NotFoundPanel};
use crate::config::app_config;
use crate::context::AppContext;
use crate::routes::ResourceKind;

pub fn detail_screen<R: Resource>(kind: ResourceKind, id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let format = CellFormat::from_config(app_config());
    let state = RwSignal::new(None::<AdminResult<R>>);

    let lookup = id.clone();
    spawn_local(async move {
        let result = commands::get::<R>(&lookup).await;
        if let Err(err) = &result {
            if !err.is_not_found() {
                ctx.toast_error(&err.user_message());
            }
        }
        state.try_set(Some(result));
    });

    let back_href = kind.list_path();
    let back_label = format!("Back to {}", kind.nav_label());

    view! {
        <section class="detail-screen">
            {move || {
                state
                    .with(|s| match s {
                        None => view! {
                            <div class="detail-loading">
                                <span class="spinner"></span>
                            </div>
                        }
                        .into_any(),
                        Some(Ok(record)) => {
                            let fields = record.detail_fields(&format);
                            let links = R::row_links(record.id());
                            let back_label = back_label.clone();
                            view! {
                                <div class="detail-panel">
                                    <NavLink href=back_href.clone() class="back-link">
                                        {back_label.clone()}
                                    </NavLink>
                                    <h1>{record.label()}</h1>
                                    <dl class="detail-fields">
                                        {fields
                                            .into_iter()
                                            .map(|(label, cell)| {
                                                view! {
                                                    <dt>{label}</dt>
                                                    <dd>
                                                        <CellView cell=cell />
                                                    </dd>
                                                }
                                            })
                                            .collect_view()}
                                    </dl>
                                    <div class="detail-links">
                                        {links
                                            .into_iter()
                                            .map(|(label, href)| view! { <NavLink href=href class="detail-link">{label}</NavLink> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                            .into_any()
                        }
                        Some(Err(err)) if err.is_not_found() => view! {
                            <NotFoundPanel
                                message=format!("{} '{}' does not exist or was deleted.", capitalize(R::SINGULAR), id)
                                back_href=back_href.clone()
                                back_label=back_label.clone()
                            />
                        }
                        .into_any(),
                        Some(Err(err)) => {
                            let back_label = back_label.clone();
                            view! {
                            <div class="detail-error" role="alert">
                                <p>{err.user_message()}</p>
                                <NavLink href=back_href.clone() class="back-link">
                                    {back_label.clone()}
                                </NavLink>
                            </div>
                            }
                            .into_any()
                        }
                    })
            }}
        </section>
    }
}
