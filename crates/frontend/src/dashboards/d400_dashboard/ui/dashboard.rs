use contracts::dashboards::d400_dashboard::{DashboardResponse, UrgentItem};
use contracts::shared::badge::BadgeVariant;
use contracts::shared::format::{format_currency_whole, group_thousands};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_dashboard::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::{StatCard, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_auth;

/// Shortcuts shown under the metric cards: (tab key, icon)
const QUICK_LINKS: &[(&str, &str)] = &[
    ("a002_jobs_queue", "activity"),
    ("a003_dispatch", "send"),
    ("a006_verifications", "shield-check"),
    ("a008_disputes", "alert-triangle"),
    ("a012_payouts", "wallet"),
    ("a013_support_tickets", "message-square"),
];

fn count(n: usize) -> String {
    group_thousands(n as u64)
}

/// Landing page: operational and financial metrics, quick links and the
/// high-priority issues that need an operator.
#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (data, set_data) = signal(None::<DashboardResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_dashboard(auth).await {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load dashboard: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let metric = move |f: fn(&DashboardResponse) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };

    let open_item = move |item: &UrgentItem| ctx.open_detail(&item.detail);

    view! {
        <PageFrame page_id="d400_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| reload.update(|n| *n += 1)
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <section class="dashboard-section">
                <h2 class="dashboard-section__title">"Operations"</h2>
                <div class="stat-cards">
                    <StatCard label="Total jobs" icon_name="list"
                        value=metric(|d| count(d.operational.total_jobs)) />
                    <StatCard label="Active bookings" icon_name="activity"
                        variant=BadgeVariant::Info
                        value=metric(|d| count(d.operational.active_bookings)) />
                    <StatCard label="Pending approvals" icon_name="shield-check"
                        variant=BadgeVariant::Warning
                        value=metric(|d| count(d.operational.pending_approvals)) />
                    <StatCard label="Completed jobs" icon_name="dashboard"
                        variant=BadgeVariant::Success
                        value=metric(|d| count(d.operational.completed_jobs)) />
                    <StatCard label="Cancellations" icon_name="x-circle"
                        value=metric(|d| count(d.operational.cancellations)) />
                    <StatCard label="Open disputes" icon_name="alert-triangle"
                        variant=BadgeVariant::Danger
                        value=metric(|d| count(d.operational.open_disputes)) />
                </div>
            </section>

            <section class="dashboard-section">
                <h2 class="dashboard-section__title">"Finance"</h2>
                <div class="stat-cards">
                    <StatCard label="GMV" icon_name="credit-card"
                        value=metric(|d| format_currency_whole(d.financial.gmv)) />
                    <StatCard label="Platform revenue" icon_name="wallet"
                        variant=BadgeVariant::Success
                        value=metric(|d| format_currency_whole(d.financial.platform_revenue)) />
                    <StatCard label="Failed payments" icon_name="x-circle"
                        variant=BadgeVariant::Danger
                        value=metric(|d| count(d.financial.failed_payments)) />
                    <StatCard label="Refunds" icon_name="rotate-ccw"
                        value=metric(|d| format_currency_whole(d.financial.refunds)) />
                    <StatCard label="Pending payouts" icon_name="wallet"
                        variant=BadgeVariant::Warning
                        value=metric(|d| format_currency_whole(d.financial.pending_payouts)) />
                </div>
            </section>

            <section class="dashboard-section">
                <h2 class="dashboard-section__title">"Quick links"</h2>
                <div class="quick-links">
                    {QUICK_LINKS.iter().map(|(key, icon_name)| {
                        let key = *key;
                        let label = tab_label_for_key(key);
                        let title = label.clone();
                        view! {
                            <button
                                class="quick-links__item"
                                on:click=move |_| ctx.open_tab(key, &title)
                            >
                                {icon(icon_name)}
                                <span>{label}</span>
                                {icon("chevron-right")}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </section>

            <section class="dashboard-section">
                <h2 class="dashboard-section__title">"High-priority issues"</h2>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell>"Issue"</TableHeaderCell>
                            <TableHeaderCell>"Priority"</TableHeaderCell>
                            <TableHeaderCell>"Raised"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let items = data.with(|d| {
                                d.as_ref().map(|d| d.urgent_items.clone()).unwrap_or_default()
                            });
                            if items.is_empty() {
                                let message = if loading.get() { "Loading..." } else { "Nothing needs attention" };
                                return view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{message}</TableCellLayout></TableCell>
                                    </TableRow>
                                }.into_any();
                            }
                            items.into_iter().map(|item| {
                                let item_type = item.item_type;
                                let priority = item.priority;
                                let title = item.title.clone();
                                let raised_at = item.raised_at.clone();
                                view! {
                                    <TableRow
                                        class:table__row--clickable=true
                                        on:click=move |_| open_item(&item)
                                    >
                                        <TableCell><StatusBadge status=item_type /></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{title}</TableCellLayout></TableCell>
                                        <TableCell><StatusBadge status=priority /></TableCell>
                                        <TableCell>{raised_at}</TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </section>
        </PageFrame>
    }
}
