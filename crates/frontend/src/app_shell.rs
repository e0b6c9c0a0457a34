//! Root components
//!
//! - `AppShell`: auth gate (LoginPage or MainLayout)
//! - `MainLayout`: the signed-in shell

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Syncs the tabs with the URL (`?active=...`) once on creation.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! { <Shell /> }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || !auth.restoring.get()
            fallback=|| view! { <div class="app-loading">"Restoring session..."</div> }
        >
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
