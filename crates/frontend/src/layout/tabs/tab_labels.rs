//! Tab titles. Aggregate pages take `list_name` from contracts.

use contracts::domain::a001_job::Job;
use contracts::domain::a002_queue_job::QueueJob;
use contracts::domain::a003_dispatch::DispatchJob;
use contracts::domain::a004_professional::Professional;
use contracts::domain::a005_company::Company;
use contracts::domain::a006_verification::Verification;
use contracts::domain::a007_cancellation::Cancellation;
use contracts::domain::a008_dispute::Dispute;
use contracts::domain::a009_refund::RefundAdjustment;
use contracts::domain::a010_payment::Payment;
use contracts::domain::a011_ledger::LedgerEntry;
use contracts::domain::a012_payout::Payout;
use contracts::domain::a013_support_ticket::SupportTicket;
use contracts::shared::aggregate::AdminAggregate;
use contracts::shared::detail::DetailRef;

use crate::system::pages::detail::detail_title;

/// Readable title for a tab key; unknown keys are shown as is
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(detail) = DetailRef::from_tab_key(key) {
        return detail_title(&detail);
    }
    let label = match key {
        "d400_dashboard" => "Dashboard",
        "a001_jobs" => Job::list_name(),
        "a002_jobs_queue" => QueueJob::list_name(),
        "a003_dispatch" => DispatchJob::list_name(),
        "a004_professionals" => Professional::list_name(),
        "a005_companies" => Company::list_name(),
        "a006_verifications" => Verification::list_name(),
        "a007_cancellations" => Cancellation::list_name(),
        "a008_disputes" => Dispute::list_name(),
        "a009_refunds" => RefundAdjustment::list_name(),
        "a010_payments" => Payment::list_name(),
        "a011_ledger" => LedgerEntry::list_name(),
        "a012_payouts" => Payout::list_name(),
        "a013_support_tickets" => SupportTicket::list_name(),
        other => other,
    };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_keys_match_aggregate_names() {
        assert_eq!(Job::full_name(), "a001_jobs");
        assert_eq!(QueueJob::full_name(), "a002_jobs_queue");
        assert_eq!(DispatchJob::full_name(), "a003_dispatch");
        assert_eq!(Professional::full_name(), "a004_professionals");
        assert_eq!(Company::full_name(), "a005_companies");
        assert_eq!(Verification::full_name(), "a006_verifications");
        assert_eq!(Cancellation::full_name(), "a007_cancellations");
        assert_eq!(Dispute::full_name(), "a008_disputes");
        assert_eq!(RefundAdjustment::full_name(), "a009_refunds");
        assert_eq!(Payment::full_name(), "a010_payments");
        assert_eq!(LedgerEntry::full_name(), "a011_ledger");
        assert_eq!(Payout::full_name(), "a012_payouts");
        assert_eq!(SupportTicket::full_name(), "a013_support_tickets");
    }

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a002_jobs_queue"), "Live Operations");
        assert_eq!(tab_label_for_key("d400_dashboard"), "Dashboard");
        assert_eq!(tab_label_for_key("detail__txn__TXN-8921"), "txn TXN-8921");
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }
}
