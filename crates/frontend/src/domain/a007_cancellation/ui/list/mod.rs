use contracts::domain::a007_cancellation::{Cancellation, CancellationSummary};
use contracts::shared::format::format_currency;
use contracts::shared::listing::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::get_json;
use crate::shared::api_utils::with_query;
use crate::shared::components::cells::{money, opt_text, status, strong, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView, StatCard};
use crate::system::auth::use_auth;

fn penalty_cell(c: &Cancellation) -> AnyView {
    if c.penalty_overridden {
        view! {
            <div class="cell-two-line">
                <span>{format_currency(c.penalty_amount)}</span>
                <span class="text-muted">"overridden"</span>
            </div>
        }
        .into_any()
    } else {
        money(c.penalty_amount)
    }
}

fn impact_cell(c: &Cancellation) -> AnyView {
    let impact = &c.professional_impact;
    two_line(
        &format!("{:.0}% \u{2192} {:.0}%", impact.completion_rate_before, impact.completion_rate_after),
        &format!("{} cancellations", impact.cancellation_count),
    )
}

impl EntityView for Cancellation {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Job ID", |c: &Cancellation| strong(&c.job_id)),
            Column::new("Customer", |c: &Cancellation| text(&c.customer_name)),
            Column::new("Professional", |c: &Cancellation| opt_text(c.professional_name.as_deref())),
            Column::new("Initiated by", |c: &Cancellation| status(c.initiated_by)),
            Column::new("Reason", |c: &Cancellation| {
                view! {
                    <div class="cell-two-line">
                        {status(c.reason)}
                        {opt_text(c.reason_detail.as_deref())}
                    </div>
                }
                .into_any()
            }),
            Column::new("Cancelled", |c: &Cancellation| text(&c.cancelled_at)).sortable("cancelled_at"),
            Column::new("Penalty", penalty_cell).sortable("penalty_amount").right(),
            Column::new("Refund", |c: &Cancellation| money(c.refund_amount)).sortable("refund_amount").right(),
            Column::new("Impact", impact_cell),
            Column::new("Disciplinary", |c: &Cancellation| opt_text(c.disciplinary_note.as_deref())),
        ]
    }
}

/// Cancellations with totals that follow the table's filters
#[component]
pub fn CancellationList() -> impl IntoView {
    let auth = use_auth();
    let query = RwSignal::new(ListQuery::default());
    let refresh = RwSignal::new(0u32);
    let (summary, set_summary) = signal(None::<CancellationSummary>);

    Effect::new(move |_| {
        let mut params = query.get().to_params();
        refresh.track();
        params.remove("page");
        params.remove("page_size");
        let path = with_query("/api/cancellations/summary", &params);
        spawn_local(async move {
            match get_json::<CancellationSummary>(auth, &path).await {
                Ok(s) => set_summary.set(Some(s)),
                Err(e) => {
                    leptos::logging::log!("Cancellation summary failed: {}", e);
                    set_summary.set(None);
                }
            }
        });
    });

    let field = move |f: fn(&CancellationSummary) -> String| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(f)))
    };

    view! {
        <EntityTable<Cancellation>
            query=query
            refresh=refresh
            summary=move || view! {
                <div class="stat-cards">
                    <StatCard label="Cancellations" icon_name="x-circle"
                        value=field(|s| s.total.to_string()) />
                    <StatCard label="Penalties" icon_name="alert-triangle"
                        value=field(|s| format_currency(s.total_penalties)) />
                    <StatCard label="Refunds" icon_name="rotate-ccw"
                        value=field(|s| format_currency(s.total_refunds)) />
                    <StatCard label="Professionals affected" icon_name="users"
                        value=field(|s| s.professionals_affected.to_string()) />
                </div>
                <div class="reason-breakdown">
                    {move || summary.get().map(|s| s.by_reason.into_iter().map(|r| view! {
                        <span class="reason-breakdown__item" data-reason=r.code>
                            {format!("{}: {}", r.label, r.count)}
                        </span>
                    }).collect_view())}
                </div>
            }
        />
    }
}
