use contracts::domain::a006_verification::Verification;
use leptos::prelude::*;

use crate::shared::components::cells::{opt_text, status, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView, StatusBadge};

/// Every submitted document with its own status; the id is what the
/// approve/reject prompts ask for.
fn documents_cell(v: &Verification) -> AnyView {
    view! {
        <ul class="doc-list">
            {v.documents.iter().map(|d| view! {
                <li class="doc-list__item" title=d.id.clone()>
                    <span>{format!("{} ({})", d.label, d.id)}</span>
                    " "
                    <StatusBadge status=d.status />
                </li>
            }).collect_view()}
        </ul>
    }
    .into_any()
}

impl EntityView for Verification {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Professional", |v: &Verification| two_line(&v.professional_name, &v.professional_email))
                .sortable("professional_name"),
            Column::new("Documents", documents_cell),
            Column::new("Submitted", |v: &Verification| text(&v.submitted_at)).sortable("submitted_at"),
            Column::new("Status", |v: &Verification| status(v.overall_status)),
            Column::new("Note", |v: &Verification| opt_text(v.first_note())),
        ]
    }
}

#[component]
pub fn VerificationList() -> impl IntoView {
    view! { <EntityTable<Verification> /> }
}
