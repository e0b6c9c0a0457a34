use contracts::domain::a012_payout::{Payout, PayoutSummary};
use contracts::shared::format::{format_currency, group_thousands};
use contracts::shared::listing::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::get_json;
use crate::shared::api_utils::with_query;
use crate::shared::components::cells::{money, opt_text, status, strong, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView, StatCard};
use crate::system::auth::use_auth;

fn schedule_cell(p: &Payout) -> AnyView {
    match (&p.processed_at, &p.scheduled_date, &p.hold_reason) {
        (Some(at), _, _) => text(&format!("Processed {}", at)),
        (None, _, Some(reason)) => text(&format!("Held: {}", reason)),
        (None, Some(date), None) => text(&format!("Scheduled {}", date)),
        (None, None, None) => opt_text(None),
    }
}

impl EntityView for Payout {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Professional", |p: &Payout| two_line(&p.professional_name, &p.professional_email))
                .sortable("professional_name"),
            Column::new("Jobs", |p: &Payout| text(&p.jobs_count.to_string())).right(),
            Column::new("Gross", |p: &Payout| money(p.gross_amount)).sortable("gross_amount").right(),
            Column::new("Commission", |p: &Payout| money(-p.commission_deduction)).right(),
            Column::new("Net", |p: &Payout| strong(&format_currency(p.net_amount))).sortable("net_amount").right(),
            Column::new("Method", |p: &Payout| {
                view! {
                    <div class="cell-two-line">
                        {status(p.payment_method)}
                        <div class="text-muted">{p.payment_method_detail.clone()}</div>
                    </div>
                }
                .into_any()
            }),
            Column::new("Status", |p: &Payout| status(p.status)),
            Column::new("Schedule", schedule_cell),
        ]
    }
}

#[component]
pub fn PayoutList() -> impl IntoView {
    let auth = use_auth();
    let query = RwSignal::new(ListQuery::default());
    let refresh = RwSignal::new(0u32);
    let (summary, set_summary) = signal(None::<PayoutSummary>);

    Effect::new(move |_| {
        let mut params = query.get().to_params();
        refresh.track();
        params.remove("page");
        params.remove("page_size");
        let path = with_query("/api/payouts/summary", &params);
        spawn_local(async move {
            match get_json::<PayoutSummary>(auth, &path).await {
                Ok(s) => set_summary.set(Some(s)),
                Err(e) => leptos::logging::log!("Payout summary failed: {}", e),
            }
        });
    });

    view! {
        <EntityTable<Payout>
            query=query
            refresh=refresh
            summary=move || view! {
                <div class="stat-cards">
                    <StatCard label="Pending payouts" icon_name="wallet"
                        value=Signal::derive(move || summary.with(|s| s.as_ref().map(|s| format_currency(s.pending_total)))) />
                    <StatCard label="Processed" icon_name="shield-check"
                        value=Signal::derive(move || summary.with(|s| s.as_ref().map(|s| group_thousands(s.processed_count as u64)))) />
                </div>
            }
        />
    }
}
