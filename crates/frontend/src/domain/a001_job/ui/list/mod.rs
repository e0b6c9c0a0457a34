use contracts::domain::a001_job::Job;
use leptos::prelude::*;

use crate::shared::components::cells::{money, opt_text, status, strong, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView};

impl EntityView for Job {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Job ID", |j: &Job| strong(&j.job_id)).sortable("job_id"),
            Column::new("Customer", |j: &Job| text(&j.customer_name)).sortable("customer_name"),
            Column::new("Service", |j: &Job| two_line(&j.service_category, &j.location)),
            Column::new("Scheduled", |j: &Job| text(&j.scheduled_time)).sortable("scheduled_time"),
            Column::new("Price", |j: &Job| money(j.price)).sortable("price").right(),
            Column::new("Payment", |j: &Job| status(j.payment_status)),
            Column::new("Status", |j: &Job| status(j.job_status)).sortable("job_status"),
            Column::new("Professional", |j: &Job| opt_text(j.assigned_professional.as_deref())),
        ]
    }
}

/// Read-only list of every job with CSV export of the filtered set
#[component]
pub fn JobList() -> impl IntoView {
    view! { <EntityTable<Job> export_path="/api/jobs/export" /> }
}
