//! Data Table Component
//!
//! Draws a `RenderedTable`: sortable headers, a spinner while loading, the
//! empty-state row, and a row action menu per row.

use leptos::prelude::*;

use course_admin_core::actions::RowMenu;
use course_admin_core::query::SortOrder;
use course_admin_core::table::{HeaderCell, RenderedTable, TableBody};

use crate::components::{CellView, RowActions};

fn header_view(header: HeaderCell, on_sort: Callback<String>) -> AnyView {
    match header.sort_field {
        Some(field) => {
            let (indicator, aria) = match header.active_order {
                Some(SortOrder::Asc) => ("▲", "ascending"),
                Some(SortOrder::Desc) => ("▼", "descending"),
                None => ("↕", "none"),
            };
            view! {
                <th class="sortable" aria-sort=aria on:click=move |_| on_sort.run(field.to_string())>
                    {header.label}
                    <span class="sort-indicator">{indicator}</span>
                </th>
            }
            .into_any()
        }
        None => view! { <th>{header.label}</th> }.into_any(),
    }
}

#[component]
pub fn DataTable(
    #[prop(into)] table: Signal<RenderedTable>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_sort: Callback<String>,
    menu: RwSignal<RowMenu>,
    /// Links for a row id, shown in its action menu
    #[prop(into)]
    row_links: Callback<String, Vec<(&'static str, String)>>,
    #[prop(into)] on_confirm_delete: Callback<()>,
) -> impl IntoView {
    let body = move || {
        let rendered = table.get();
        if loading.get() {
            return view! {
                <tr>
                    <td class="table-loading" colspan=rendered.column_count().to_string()>
                        <span class="spinner"></span>
                    </td>
                </tr>
            }
            .into_any();
        }
        let has_actions = rendered.has_actions;
        match rendered.body {
            TableBody::Empty { message, colspan } => view! {
                <tr>
                    <td class="table-empty" colspan=colspan.to_string()>{message}</td>
                </tr>
            }
            .into_any(),
            TableBody::Rows(rows) => rows
                .into_iter()
                .map(|row| {
                    let actions = has_actions.then(|| {
                        let links = row_links.run(row.id.clone());
                        view! {
                            <td class="actions-col">
                                <RowActions
                                    row_id=row.id.clone()
                                    menu=menu
                                    links=links
                                    on_confirm_delete=on_confirm_delete
                                />
                            </td>
                        }
                    });
                    view! {
                        <tr data-id=row.id.clone()>
                            {row
                                .cells
                                .into_iter()
                                .map(|cell| view! { <td><CellView cell=cell /></td> })
                                .collect_view()}
                            {actions}
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="table-wrap">
            <table class="data-table">
                <thead>
                    <tr>
                        {move || {
                            table
                                .with(|t| t.headers.clone())
                                .into_iter()
                                .map(|h| header_view(h, on_sort))
                                .collect_view()
                        }}
                        {move || table.with(|t| t.has_actions).then(|| view! { <th class="actions-col">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
