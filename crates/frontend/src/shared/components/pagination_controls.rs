use crate::shared::icons::icon;
use contracts::shared::listing::{ListQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;

const PAGE_SIZES: [usize; 4] = [25, 50, 100, 200];

/// "3 / 7 (312)"; an empty result still reads as page 1 of 1
fn page_label(page: usize, total_pages: usize, total: usize) -> String {
    format!("{} / {} ({})", page + 1, total_pages.max(1), total)
}

/// Page reached by a navigation button, or `None` when it is disabled
fn step(page: usize, total_pages: usize, target: Step) -> Option<usize> {
    let last = total_pages.saturating_sub(1);
    let next = match target {
        Step::First => 0,
        Step::Prev => page.checked_sub(1)?,
        Step::Next => page + 1,
        Step::Last => last,
    };
    (next != page && next <= last).then_some(next)
}

#[derive(Clone, Copy)]
enum Step {
    First,
    Prev,
    Next,
    Last,
}

/// Page navigation bound to the table's query. Changing the page size goes
/// back to the first page.
#[component]
pub fn PaginationControls(
    query: RwSignal<ListQuery>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
) -> impl IntoView {
    let target = move |s: Step| query.with(|q| step(q.page, total_pages.get(), s));

    let nav = move |s: Step, icon_name: &'static str, title: &'static str| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || target(s).is_none()
                on:click=move |_| {
                    if let Some(page) = target(s) {
                        query.update(|q| q.page = page);
                    }
                }
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav(Step::First, "chevrons-left", "First page")}
            {nav(Step::Prev, "chevron-left", "Previous page")}
            <span class="pagination-info">
                {move || page_label(query.with(|q| q.page), total_pages.get(), total_count.get())}
            </span>
            {nav(Step::Next, "chevron-right", "Next page")}
            {nav(Step::Last, "chevrons-right", "Last page")}
            <select
                class="page-size-select"
                prop:value=move || query.with(|q| q.page_size.to_string())
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                    query.update(|q| {
                        q.page_size = size;
                        q.page = 0;
                    });
                }
            >
                {PAGE_SIZES.into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || query.with(|q| q.page_size == size)>
                        {size.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(2, 7, 312), "3 / 7 (312)");
        assert_eq!(page_label(0, 0, 0), "1 / 1 (0)");
    }

    #[test]
    fn test_step_bounds() {
        assert_eq!(step(0, 5, Step::First), None);
        assert_eq!(step(0, 5, Step::Prev), None);
        assert_eq!(step(0, 5, Step::Next), Some(1));
        assert_eq!(step(0, 5, Step::Last), Some(4));
        assert_eq!(step(4, 5, Step::Next), None);
        assert_eq!(step(4, 5, Step::Prev), Some(3));
        assert_eq!(step(0, 0, Step::Next), None);
        assert_eq!(step(0, 1, Step::Last), None);
    }
}
