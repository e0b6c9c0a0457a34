use crate::shared::icons::icon;
use leptos::prelude::*;

/// One entry of a row's action menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub code: &'static str,
    pub label: &'static str,
    pub danger: bool,
}

/// "⋯" button with a dropdown of the row's actions.
///
/// Clicks inside the menu never reach the row.
#[component]
pub fn ActionMenu(items: Vec<MenuItem>, on_select: Callback<&'static str>) -> impl IntoView {
    let open = RwSignal::new(false);
    let items = StoredValue::new(items);

    view! {
        <div class="action-menu" on:click=|e| e.stop_propagation()>
            <button
                class="action-menu__trigger"
                title="Actions"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("more-horizontal")}
            </button>
            <Show when=move || open.get()>
                <div class="action-menu__dropdown" on:mouseleave=move |_| open.set(false)>
                    {items.get_value().into_iter().map(|item| {
                        let class = if item.danger {
                            "action-menu__item action-menu__item--danger"
                        } else {
                            "action-menu__item"
                        };
                        view! {
                            <button
                                class=class
                                data-action=item.code
                                on:click=move |_| {
                                    open.set(false);
                                    on_select.run(item.code);
                                }
                            >
                                {item.label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
