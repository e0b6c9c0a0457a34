use contracts::domain::a011_ledger::LedgerEntry;
use leptos::prelude::*;

use crate::shared::components::cells::{money, opt_text, status, strong, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView};

impl EntityView for LedgerEntry {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Transaction", |e: &LedgerEntry| strong(&e.transaction_id)),
            Column::new("Type", |e: &LedgerEntry| status(e.entry_type)),
            Column::new("Job", |e: &LedgerEntry| opt_text(e.related_job_id.as_deref())),
            Column::new("User", |e: &LedgerEntry| {
                two_line(&e.related_user_label, e.related_user_id.as_deref().unwrap_or(""))
            }),
            Column::new("Amount", |e: &LedgerEntry| money(e.amount)).sortable("amount").right(),
            Column::new("Fees", |e: &LedgerEntry| money(e.fees)).right(),
            Column::new("Taxes", |e: &LedgerEntry| money(e.taxes)).right(),
            Column::new("Net", |e: &LedgerEntry| strong(&e.net_display())).sortable("net").right(),
            Column::new("Status", |e: &LedgerEntry| status(e.status)),
            Column::new("Timestamp", |e: &LedgerEntry| text(&e.timestamp)).sortable("timestamp"),
        ]
    }
}

#[component]
pub fn LedgerList() -> impl IntoView {
    view! { <EntityTable<LedgerEntry> export_path="/api/ledger/export" /> }
}
