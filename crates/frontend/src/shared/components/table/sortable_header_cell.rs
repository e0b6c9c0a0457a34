//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_field="price"
//!     align_right=true
//!     current_sort_field=Signal::derive(move || query.with(|q| q.sort.clone().unwrap_or_default()))
//!     sort_ascending=Signal::derive(move || query.with(|q| !q.desc))
//!     on_sort=Callback::new(move |field| query.update(|q| toggle_sort(q, field)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    sort_field: &'static str,
    #[prop(into)] current_sort_field: Signal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    on_sort: Callback<&'static str>,
    /// Numeric columns are right aligned
    #[prop(optional)]
    align_right: bool,
) -> impl IntoView {
    let header_style = if align_right {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field)
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), sort_field)>
                    {move || get_sort_indicator(&current_sort_field.get(), sort_field, sort_ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
