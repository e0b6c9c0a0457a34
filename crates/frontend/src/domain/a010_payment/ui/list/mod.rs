use contracts::domain::a010_payment::{Payment, PaymentMetrics};
use contracts::shared::badge::BadgeVariant;
use contracts::shared::format::{format_currency_whole, format_percent, group_thousands};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::get_json;
use crate::shared::components::cells::{money, status, strong, text};
use crate::shared::components::{Column, EntityTable, EntityView, StatCard};
use crate::system::auth::use_auth;

impl EntityView for Payment {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Payment ID", |p: &Payment| strong(&p.id)),
            Column::new("Job ID", |p: &Payment| text(&p.job_id)),
            Column::new("Customer", |p: &Payment| text(&p.customer_name)),
            Column::new("Service", |p: &Payment| text(&p.service_category)),
            Column::new("Date", |p: &Payment| text(&p.date)).sortable("date"),
            Column::new("Amount", |p: &Payment| money(p.amount)).sortable("amount").right(),
            Column::new("Status", |p: &Payment| status(p.status)),
        ]
    }
}

/// Metric cards over all payments plus the filterable transaction list
#[component]
pub fn PaymentList() -> impl IntoView {
    let auth = use_auth();
    let refresh = RwSignal::new(0u32);
    let (metrics, set_metrics) = signal(None::<PaymentMetrics>);

    Effect::new(move |_| {
        refresh.track();
        spawn_local(async move {
            match get_json::<PaymentMetrics>(auth, "/api/payments/metrics").await {
                Ok(m) => set_metrics.set(Some(m)),
                Err(e) => leptos::logging::log!("Payment metrics failed: {}", e),
            }
        });
    });

    let value = move |f: fn(&PaymentMetrics) -> String| {
        Signal::derive(move || metrics.with(|m| m.as_ref().map(f)))
    };

    view! {
        <EntityTable<Payment>
            refresh=refresh
            summary=move || view! {
                <div class="stat-cards">
                    <StatCard label="Total revenue" icon_name="credit-card"
                        value=value(|m| format_currency_whole(m.total_revenue)) />
                    <StatCard label="Platform earnings" icon_name="wallet"
                        value=value(|m| format_currency_whole(m.platform_earnings)) />
                    <StatCard label="Processed transactions" icon_name="activity"
                        value=value(|m| group_thousands(m.processed_transactions as u64)) />
                    <StatCard label="Successful payments" icon_name="shield-check"
                        variant=BadgeVariant::Success
                        value=value(|m| group_thousands(m.successful_payments_count as u64))
                        subtitle=value(|m| format_currency_whole(m.successful_payments_amount)) />
                    <StatCard label="Failed payments" icon_name="x-circle"
                        variant=BadgeVariant::Danger
                        value=value(|m| group_thousands(m.failed_payments_count as u64))
                        subtitle=value(|m| format_currency_whole(m.failed_payments_amount)) />
                    <StatCard label="Refund rate" icon_name="rotate-ccw"
                        value=value(|m| format_percent(m.refund_rate)) />
                    <StatCard label="Pending payouts" icon_name="wallet"
                        variant=BadgeVariant::Warning
                        value=value(|m| format_currency_whole(m.pending_payouts)) />
                </div>
            }
        />
    }
}
