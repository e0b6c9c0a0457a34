use contracts::domain::a013_support_ticket::SupportTicket;
use leptos::prelude::*;

use crate::shared::components::cells::{opt_text, status, strong, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView};

fn subject_cell(t: &SupportTicket) -> AnyView {
    view! {
        <div class="cell-two-line">
            {strong(&t.subject)}
            <div class="text-muted ticket-preview">{t.last_message_preview.clone()}</div>
        </div>
    }
    .into_any()
}

impl EntityView for SupportTicket {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Ticket", |t: &SupportTicket| strong(&t.ticket_id)),
            Column::new("Subject", subject_cell),
            Column::new("Submitted by", |t: &SupportTicket| {
                view! {
                    <div class="cell-two-line">
                        {two_line(&t.submitted_by_name, &t.submitted_by_email)}
                        {status(t.submitted_by_type)}
                    </div>
                }
                .into_any()
            }),
            Column::new("Related", |t: &SupportTicket| {
                two_line(t.related_job_id.as_deref().unwrap_or("\u{2014}"), &t.related_account_label)
            }),
            Column::new("Priority", |t: &SupportTicket| status(t.priority)).sortable("priority"),
            Column::new("Status", |t: &SupportTicket| status(t.status)),
            Column::new("Messages", |t: &SupportTicket| text(&t.message_count.to_string()))
                .sortable("message_count")
                .right(),
            Column::new("Last activity", |t: &SupportTicket| text(&t.last_activity_at)).sortable("last_activity_at"),
            Column::new("Assigned", |t: &SupportTicket| opt_text(t.assigned_to.as_deref())),
        ]
    }
}

#[component]
pub fn SupportTicketList() -> impl IntoView {
    view! { <EntityTable<SupportTicket> /> }
}
