//! Cell View Component
//!
//! Draws one table cell from the core table model.

use leptos::prelude::*;

use course_admin_core::table::{BadgeTone, Cell};

#[component]
pub fn CellView(cell: Cell) -> impl IntoView {
    match cell {
        Cell::Text(text) => view! { <span class="cell-text">{text}</span> }.into_any(),
        Cell::Truncated { display, full } => {
            let title = full.clone();
            view! {
            <span class="cell-truncated" title=title>
                {display}
                <span class="cell-tooltip" role="tooltip">{full}</span>
            </span>
            }
            .into_any()
        }
        Cell::Badge { label, tone } => {
            let class = match tone {
                BadgeTone::Filled => "badge badge-filled",
                BadgeTone::Muted => "badge badge-muted",
            };
            view! { <span class=class>{label}</span> }.into_any()
        }
        Cell::DateTime { date, time } => view! {
            <div class="cell-datetime">
                <span>{date}</span>
                <span class="cell-time">{time}</span>
            </div>
        }
        .into_any(),
        Cell::ImageWithTooltip { src, alt, tooltip } => {
            let image = src.map(|src| {
                let alt = alt.clone();
                view! { <img class="cell-thumb" src=src alt=alt loading="lazy" /> }
            });
            let title = tooltip.clone();
            view! {
                <div class="cell-image" title=title>
                    {image}
                    <span class="cell-image-label">{alt}</span>
                    <span class="cell-tooltip" role="tooltip">{tooltip}</span>
                </div>
            }
            .into_any()
        }
        Cell::Empty => view! { <span class="cell-empty">"-"</span> }.into_any(),
    }
}
