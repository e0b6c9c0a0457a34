use contracts::domain::a005_company::Company;
use leptos::prelude::*;

use crate::shared::components::cells::{rating, status, text, two_line};
use crate::shared::components::{Column, EntityTable, EntityView};

impl EntityView for Company {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Company", |c: &Company| two_line(&c.company_name, &c.contact_email))
                .sortable("company_name"),
            Column::new("Contact", |c: &Company| text(&c.contact_name)),
            Column::new("Plan", |c: &Company| text(&c.subscription_plan)),
            Column::new("Employees", |c: &Company| text(&c.employees_count.to_string())).right(),
            Column::new("Jobs", |c: &Company| {
                two_line(
                    &format!("{} / {}", c.completed_jobs, c.total_jobs),
                    &format!("{:.0}% completed", c.completion_rate),
                )
            })
            .sortable("total_jobs")
            .right(),
            Column::new("Rating", |c: &Company| rating(c.avg_rating)).sortable("avg_rating").right(),
            Column::new("Approval", |c: &Company| status(c.approval_status)),
            Column::new("Account", |c: &Company| status(c.account_status)),
        ]
    }
}

#[component]
pub fn CompanyList() -> impl IntoView {
    view! { <EntityTable<Company> /> }
}
