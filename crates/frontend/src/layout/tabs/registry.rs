//! Tab content registry: tab key → view.

use crate::dashboards::d400_dashboard::ui::Dashboard;
use crate::domain::a001_job::ui::list::JobList;
use crate::domain::a002_queue_job::ui::list::QueueJobList;
use crate::domain::a003_dispatch::ui::list::DispatchList;
use crate::domain::a004_professional::ui::list::ProfessionalList;
use crate::domain::a005_company::ui::list::CompanyList;
use crate::domain::a006_verification::ui::list::VerificationList;
use crate::domain::a007_cancellation::ui::list::CancellationList;
use crate::domain::a008_dispute::ui::list::DisputeList;
use crate::domain::a009_refund::ui::list::RefundList;
use crate::domain::a010_payment::ui::list::PaymentList;
use crate::domain::a011_ledger::ui::list::LedgerList;
use crate::domain::a012_payout::ui::list::PayoutList;
use crate::domain::a013_support_ticket::ui::list::SupportTicketList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::pages::detail::DetailPlaceholder;
use contracts::shared::detail::DetailRef;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab by its key.
///
/// Unknown keys render a placeholder.
pub fn render_tab_content(key: &str, _tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // Dashboards (d4xx)
        "d400_dashboard" => view! { <Dashboard /> }.into_any(),

        // Aggregates (a001-a013)
        "a001_jobs" => view! { <JobList /> }.into_any(),
        "a002_jobs_queue" => view! { <QueueJobList /> }.into_any(),
        "a003_dispatch" => view! { <DispatchList /> }.into_any(),
        "a004_professionals" => view! { <ProfessionalList /> }.into_any(),
        "a005_companies" => view! { <CompanyList /> }.into_any(),
        "a006_verifications" => view! { <VerificationList /> }.into_any(),
        "a007_cancellations" => view! { <CancellationList /> }.into_any(),
        "a008_disputes" => view! { <DisputeList /> }.into_any(),
        "a009_refunds" => view! { <RefundList /> }.into_any(),
        "a010_payments" => view! { <PaymentList /> }.into_any(),
        "a011_ledger" => view! { <LedgerList /> }.into_any(),
        "a012_payouts" => view! { <PayoutList /> }.into_any(),
        "a013_support_tickets" => view! { <SupportTicketList /> }.into_any(),

        // Shared detail placeholder
        k if DetailRef::is_tab_key(k) => match DetailRef::from_tab_key(k) {
            Some(detail) => view! { <DetailPlaceholder detail=detail /> }.into_any(),
            None => {
                log!("Bad detail tab key: {}", k);
                view! { <div class="placeholder">"Bad detail link"</div> }.into_any()
            }
        },

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
