use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel of a list page.
///
/// Header: toggle with the active filter count, pagination in the middle
/// and an optional toolbar on the right. Body: filter fields, then the chips
/// of active filters.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    #[prop(into)] pagination_controls: ViewFn,
    #[prop(into)] filter_content: ViewFn,
    #[prop(optional, into)] filter_tags: Option<ViewFn>,
    #[prop(optional, into)] toolbar: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|open| *open = !*open)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">{pagination_controls.run()}</div>
                <div class="filter-panel-header__right">{toolbar.map(|t| t.run())}</div>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">
                    {filter_content.run()}
                    {filter_tags.map(|tags| view! { <div class="filter-panel-tags">{tags.run()}</div> })}
                </div>
            </div>
        </div>
    }
}

/// Chip of one active filter; the cross removes it
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                class="filter-tag__remove"
                aria-label="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
