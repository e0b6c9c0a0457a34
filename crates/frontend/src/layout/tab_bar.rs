//! Bar of opened tabs. Inactive tab content stays mounted in `TabPage`.

use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::layout::tabs::TabPage;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabButton(tab: Tab, ctx: AppGlobalContext) -> impl IntoView {
    let Tab { key, title } = tab;
    let key = StoredValue::new(key);
    let title_attr = title.clone();
    let is_active = Memo::new(move |_| {
        ctx.active
            .with(|active| key.with_value(|k| active.as_deref() == Some(k.as_str())))
    });

    view! {
        <div
            class="tab"
            class:active=is_active
            title=title_attr
            on:click=move |_| key.with_value(|k| ctx.activate_tab(k))
        >
            <span>{title}</span>
            <button
                class="tab-close"
                aria-label="Close tab"
                on:click=move |e: ev::MouseEvent| {
                    e.stop_propagation();
                    key.with_value(|k| ctx.close_tab(k));
                }
            >
                "\u{00d7}"
            </button>
        </div>
    }
}

/// Tab buttons on top, the content of every opened tab below
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let opened = move || ctx.opened.get();

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=opened
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabButton tab=tab ctx=ctx /> }
                />
            </div>
            <div class="tab-content">
                <For
                    each=opened
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab tabs_store=ctx /> }
                />
            </div>
        </div>
    }
}
