//! Sidebar menu. Every entry opens (or focuses) a tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![MenuGroup {
        id: "main",
        label: "Main",
        items: vec![
            ("d400_dashboard", "Dashboard", "dashboard"),
            ("a002_jobs_queue", "Live Operations", "activity"),
            ("a004_professionals", "Professionals", "users"),
            ("a005_companies", "Companies", "building"),
            ("a006_verifications", "Verifications", "shield-check"),
            ("a001_jobs", "Jobs List", "list"),
            ("a003_dispatch", "Dispatch", "send"),
            ("a007_cancellations", "Cancellations Management", "x-circle"),
            ("a008_disputes", "Disputes", "alert-triangle"),
            ("a009_refunds", "Refunds & Adjustments", "rotate-ccw"),
            ("a010_payments", "Payments Overview", "credit-card"),
            ("a011_ledger", "Transactions Ledger", "book"),
            ("a012_payouts", "Payouts to Professionals", "wallet"),
            ("a013_support_tickets", "Support Tickets Inbox", "message-square"),
        ],
    }]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div data-group=group.id>
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(id, label, icon_name)| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || {
                                        ctx.active.get().as_deref() == Some(id)
                                    }
                                    style:padding-left="12px"
                                    on:click=move |_| {
                                        // tab title is the page name, the menu may abbreviate it
                                        ctx.open_tab(id, &tab_label_for_key(id));
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
