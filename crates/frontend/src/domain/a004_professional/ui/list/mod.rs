use contracts::domain::a004_professional::Professional;
use leptos::prelude::*;

use crate::shared::components::cells::{rating, status, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView};

impl EntityView for Professional {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Professional", |p: &Professional| two_line(&p.name, &p.email)).sortable("name"),
            Column::new("Services", |p: &Professional| text(&p.service_categories.join(", "))),
            Column::new("Areas", |p: &Professional| text(&p.service_areas.join(", "))),
            Column::new("Rating", |p: &Professional| rating(p.rating)).sortable("rating").right(),
            Column::new("Jobs", |p: &Professional| {
                two_line(&p.total_jobs.to_string(), &format!("{:.0}% completed", p.completion_rate))
            })
            .sortable("total_jobs")
            .right(),
            Column::new("Verification", |p: &Professional| {
                view! {
                    <div class="cell-two-line">
                        {status(p.verification_status)}
                        <div class="text-muted">{format!("{} documents", p.documents_count)}</div>
                    </div>
                }
                .into_any()
            }),
            Column::new("Plan", |p: &Professional| text(&p.subscription_plan)),
            Column::new("Commission", |p: &Professional| text(&format!("{:.0}%", p.commission_rate)))
                .sortable("commission_rate")
                .right(),
            Column::new("Account", |p: &Professional| status(p.account_status)),
        ]
    }
}

#[component]
pub fn ProfessionalList() -> impl IntoView {
    view! { <EntityTable<Professional> /> }
}
