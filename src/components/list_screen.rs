//! Resource List Screen
//!
//! One generic screen for every resource: toolbar (search, filters,
//! refresh, clear), table and pagination, all driven by the URL query.

use leptos::prelude::*;
use leptos::task::spawn_local;

use course_admin_core::actions::{begin_delete, finish_delete, RowMenu};
use course_admin_core::query::SEARCH_KEY;
use course_admin_core::table::CellFormat;
use course_admin_core::{Collection, LoadOutcome, Resource, ViewAction, ViewState};

use crate::commands;
use crate::components::{DataTable, FilterSelectView, PaginationBar, SearchInput};
use crate::config::app_config;
use crate::context::{now_ms, AppContext};
use crate::routes::ResourceKind;

/// List screen for `R`; a plain function because components cannot be
/// generic over a trait with associated consts.
pub fn list_screen<R: Resource>(kind: ResourceKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = app_config();
    let format = CellFormat::from_config(config);

    let query = Memo::new(move |_| ViewState::from_query(&ctx.location.query.get()).list_query(config.page_limit));
    let collection = RwSignal::new(Collection::<R>::new());
    let menu = RwSignal::new(RowMenu::default());
    let (refresh, set_refresh) = signal(0u32);

    // Fetch whenever the query changes or a reload is requested
    Effect::new(move |_| {
        let q = query.get();
        refresh.track();
        ctx.reload_trigger.track();
        let Some(ticket) = collection.try_update(|c| c.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = commands::list::<R>(&q).await;
            if let Some(LoadOutcome::Failed(err)) = collection.try_update(|c| c.finish_load(ticket, result)) {
                ctx.toast_error(&err.user_message());
            }
        });
    });

    let table = Memo::new(move |_| {
        let q = query.get();
        collection.with(|c| R::render(c.records(), &q, &format))
    });
    let loading = Signal::derive(move || collection.with(|c| c.is_loading()));
    let pager = Signal::derive(move || {
        let page = query.with(|q| q.page);
        collection.with(|c| c.pager(page))
    });
    let search = Signal::derive(move || query.with(|q| q.filter(SEARCH_KEY).map(str::to_string)));

    let dispatch = Callback::new(move |action: ViewAction| {
        ctx.dispatch(action);
    });
    let on_sort = Callback::new(move |field: String| {
        ctx.dispatch(ViewAction::ToggleSort(field));
    });
    let on_page = Callback::new(move |page: u32| {
        ctx.dispatch(ViewAction::SetPage(page));
    });
    let row_links = Callback::new(move |id: String| kind.row_menu_links::<R>(&id));

    let on_confirm_delete = Callback::new(move |_: ()| {
        let pending = menu
            .try_update(|m| ctx.toasts.try_update(|t| begin_delete::<R>(m, t, now_ms())))
            .flatten()
            .flatten();
        let Some(pending) = pending else {
            return;
        };
        spawn_local(async move {
            let result = commands::delete::<R>(&pending.id).await;
            let deleted = menu
                .try_update(|m| {
                    ctx.toasts.try_update(|t| {
                        collection.try_update(|c| finish_delete(pending, &result, m, t, c, now_ms()))
                    })
                })
                .flatten()
                .flatten()
                .unwrap_or(false);
            if !deleted {
                return;
            }
            // Refetch so rows from later pages move up
            let Some(page) = query.try_with_untracked(|q| q.page) else {
                return;
            };
            match collection.try_with_untracked(|c| c.reload_page(page)).flatten() {
                Some(target) if target != page => {
                    ctx.dispatch(ViewAction::SetPage(target));
                }
                Some(_) => {
                    set_refresh.try_update(|n| *n += 1);
                }
                None => {}
            }
        });
    });

    let filters = R::filters()
        .into_iter()
        .map(|select| {
            let current = select.clone();
            let value = Signal::derive(move || query.with(|q| current.selected(q).to_string()));
            view! { <FilterSelectView select=select value=value on_change=dispatch /> }
        })
        .collect_view();

    view! {
        <section class="list-screen">
            <header class="list-header">
                <h1>{R::title()}</h1>
                <div class="list-toolbar">
                    <SearchInput
                        value=search
                        on_commit=dispatch
                        placeholder="Search..."
                    />
                    {filters}
                    <button
                        class="toolbar-btn"
                        disabled=move || loading.get()
                        on:click=move |_| set_refresh.update(|n| *n += 1)
                    >
                        "Refresh"
                    </button>
                    <button class="toolbar-btn" on:click=move |_| dispatch.run(ViewAction::ClearFilters)>
                        "Clear filters"
                    </button>
                </div>
            </header>
            <DataTable
                table=table
                loading=loading
                on_sort=on_sort
                menu=menu
                row_links=row_links
                on_confirm_delete=on_confirm_delete
            />
            <PaginationBar pager=pager busy=loading on_page=on_page />
        </section>
    }
}
