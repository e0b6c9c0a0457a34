pub mod global_context;
pub mod sidebar;
pub mod tab_bar;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;
use tab_bar::TabBar;
use top_header::TopHeader;

/// Signed-in layout.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |  TabBar + pages  |
/// +------------------------------+
/// ```
///
/// The sidebar zone collapses with `AppGlobalContext::left_open`.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </aside>
                <main data-zone="center" class="app-main app-tabs">
                    <TabBar />
                </main>
            </div>
        </div>
    }
}
