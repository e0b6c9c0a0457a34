use contracts::domain::a002_queue_job::QueueJob;
use leptos::prelude::*;

use crate::shared::components::cells::{opt_text, status, strong, text};
use crate::shared::components::{Column, EntityTable, EntityView};

impl EntityView for QueueJob {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Job ID", |j: &QueueJob| strong(&j.job_id)).sortable("job_id"),
            Column::new("Customer", |j: &QueueJob| text(&j.customer_name)),
            Column::new("Service", |j: &QueueJob| text(&j.service_category)),
            Column::new("Scheduled", |j: &QueueJob| text(&j.scheduled_time)).sortable("scheduled_time"),
            Column::new("Professional", |j: &QueueJob| opt_text(j.assigned_professional.as_deref())),
            Column::new("Priority", |j: &QueueJob| status(j.priority)).sortable("priority"),
            Column::new("Status", |j: &QueueJob| status(j.status)),
            Column::new("Flag", |j: &QueueJob| opt_text(j.flag.as_deref())),
        ]
    }
}

#[component]
pub fn QueueJobList() -> impl IntoView {
    view! { <EntityTable<QueueJob> /> }
}
