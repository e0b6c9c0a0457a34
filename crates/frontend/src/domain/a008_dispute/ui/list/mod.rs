use contracts::domain::a008_dispute::Dispute;
use contracts::shared::format::format_currency;
use leptos::prelude::*;

use crate::shared::components::cells::{money, opt_text, status, strong, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView};

fn evidence_cell(d: &Dispute) -> AnyView {
    let chat = if d.has_chat_history { "chat history" } else { "no chat" };
    two_line(&format!("{} files", d.evidence_count), chat)
}

fn outcome_cell(d: &Dispute) -> AnyView {
    match (d.refunded_amount, d.penalty_note.as_deref()) {
        (Some(amount), _) => text(&format!("Refunded {}", format_currency(amount))),
        (None, Some(note)) => text(note),
        (None, None) => opt_text(None),
    }
}

impl EntityView for Dispute {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Job", |d: &Dispute| {
                view! {
                    <div class="cell-two-line">
                        {strong(&d.job_id)}
                        {status(d.job_status)}
                    </div>
                }
                .into_any()
            }),
            Column::new("Parties", |d: &Dispute| two_line(&d.customer_name, &d.professional_name)),
            Column::new("Raised by", |d: &Dispute| status(d.raised_by)),
            Column::new("Reason", |d: &Dispute| {
                view! {
                    <div class="cell-two-line">
                        {status(d.reason)}
                        <div class="text-muted">{d.reason_summary.clone()}</div>
                    </div>
                }
                .into_any()
            }),
            Column::new("Opened", |d: &Dispute| text(&d.opened_at)).sortable("opened_at"),
            Column::new("Amount", |d: &Dispute| money(d.job_amount)).sortable("job_amount").right(),
            Column::new("Evidence", evidence_cell),
            Column::new("Status", |d: &Dispute| status(d.status)),
            Column::new("Outcome", outcome_cell),
        ]
    }
}

#[component]
pub fn DisputeList() -> impl IntoView {
    view! { <EntityTable<Dispute> /> }
}
