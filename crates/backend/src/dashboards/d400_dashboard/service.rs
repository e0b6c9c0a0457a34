use contracts::dashboards::d400_dashboard::{
    sort_urgent, DashboardResponse, FinancialMetrics, IssuePriority, OperationalMetrics, UrgentItem,
    UrgentType,
};
use contracts::domain::a001_job::{Job, JobStatus};
use contracts::domain::a002_queue_job::{Priority, QueueJob, QueueJobStatus};
use contracts::domain::a004_professional::{AccountStatus, Professional};
use contracts::domain::a005_company::{ApprovalStatus, Company};
use contracts::domain::a006_verification::{OverallStatus, Verification};
use contracts::domain::a007_cancellation::Cancellation;
use contracts::domain::a008_dispute::Dispute;
use contracts::domain::a009_refund::{AdjustmentType, RefundAdjustment};
use contracts::domain::a010_payment::{Payment, TransactionStatus};
use contracts::domain::a011_ledger::{platform_earnings, LedgerEntry};
use contracts::domain::a012_payout::{Payout, PayoutStatus, PayoutSummary};
use contracts::domain::a013_support_ticket::SupportTicket;
use contracts::shared::aggregate::AdminAggregate;
use contracts::shared::metadata::Stored;
use contracts::shared::status::StatusDisplay;

use crate::shared::state::AppState;
use crate::shared::store::EntityStore;

/// Point-in-time copy of every dataset the dashboard reads
pub struct Snapshot {
    pub jobs: Vec<Job>,
    pub jobs_queue: Vec<QueueJob>,
    pub professionals: Vec<Professional>,
    pub companies: Vec<Company>,
    pub verifications: Vec<Verification>,
    pub cancellations: Vec<Cancellation>,
    pub disputes: Vec<Dispute>,
    pub refunds: Vec<RefundAdjustment>,
    pub payments: Vec<Payment>,
    pub ledger: Vec<LedgerEntry>,
    pub payouts: Vec<Payout>,
    pub support_tickets: Vec<SupportTicket>,
}

async fn items<T>(store: &EntityStore<T>) -> Vec<T>
where
    T: contracts::shared::listing::ListRecord + AdminAggregate + Clone + Send + Sync,
{
    store
        .read(|rows: &[Stored<T>]| rows.iter().map(|s| s.item.clone()).collect())
        .await
}

/// Dashboard computed from the live stores
pub async fn compute(state: &AppState) -> DashboardResponse {
    let snapshot = Snapshot {
        jobs: items(&state.jobs).await,
        jobs_queue: items(&state.jobs_queue).await,
        professionals: items(&state.professionals).await,
        companies: items(&state.companies).await,
        verifications: items(&state.verifications).await,
        cancellations: items(&state.cancellations).await,
        disputes: items(&state.disputes).await,
        refunds: items(&state.refunds).await,
        payments: items(&state.payments).await,
        ledger: items(&state.ledger).await,
        payouts: items(&state.payouts).await,
        support_tickets: items(&state.support_tickets).await,
    };
    let response = build(&snapshot);
    tracing::debug!("Dashboard: {} urgent items", response.urgent_items.len());
    response
}

pub fn build(s: &Snapshot) -> DashboardResponse {
    let mut urgent_items = urgent_items(s);
    sort_urgent(&mut urgent_items);
    DashboardResponse {
        operational: operational(s),
        financial: financial(s),
        urgent_items,
    }
}

fn operational(s: &Snapshot) -> OperationalMetrics {
    let pending_approvals = s
        .jobs_queue
        .iter()
        .filter(|q| q.status == QueueJobStatus::PendingApproval)
        .count()
        + s
            .professionals
            .iter()
            .filter(|p| p.account_status == AccountStatus::PendingApproval)
            .count()
        + s
            .companies
            .iter()
            .filter(|c| c.approval_status == ApprovalStatus::Pending)
            .count()
        + s
            .refunds
            .iter()
            .filter(|r| r.approval_status == ApprovalStatus::Pending)
            .count();

    OperationalMetrics {
        total_jobs: s.jobs.len(),
        active_bookings: s.jobs.iter().filter(|j| j.is_active_booking()).count(),
        pending_approvals,
        completed_jobs: s
            .jobs
            .iter()
            .filter(|j| j.job_status == JobStatus::Completed)
            .count(),
        cancellations: s.cancellations.len(),
        open_disputes: s.disputes.iter().filter(|d| d.status.is_open()).count(),
    }
}

fn financial(s: &Snapshot) -> FinancialMetrics {
    FinancialMetrics {
        gmv: s
            .payments
            .iter()
            .filter(|p| p.status != TransactionStatus::Failed)
            .map(|p| p.amount)
            .sum(),
        platform_revenue: platform_earnings(&s.ledger),
        failed_payments: s
            .payments
            .iter()
            .filter(|p| p.status == TransactionStatus::Failed)
            .count(),
        refunds: s
            .refunds
            .iter()
            .filter(|r| {
                r.approval_status == ApprovalStatus::Approved
                    && matches!(
                        r.adjustment_type,
                        AdjustmentType::RefundFull | AdjustmentType::RefundPartial
                    )
            })
            .map(|r| r.amount)
            .sum(),
        pending_payouts: PayoutSummary::compute(&s.payouts).pending_total,
    }
}

fn urgent_items(s: &Snapshot) -> Vec<UrgentItem> {
    let mut out = Vec::new();

    for d in s.disputes.iter().filter(|d| d.status.is_open()) {
        out.push(UrgentItem {
            item_type: UrgentType::Dispute,
            title: format!("{} dispute on {}", d.reason.display_name(), d.job_id),
            priority: IssuePriority::High,
            raised_at: d.opened_at.clone(),
            detail: d.detail_ref(),
        });
    }

    for v in s
        .verifications
        .iter()
        .filter(|v| v.overall_status == OverallStatus::Pending)
    {
        out.push(UrgentItem {
            item_type: UrgentType::Approval,
            title: format!("Pro verification pending: {}", v.professional_name),
            priority: IssuePriority::High,
            raised_at: v.submitted_at.clone(),
            detail: v.detail_ref(),
        });
    }

    for q in s.jobs_queue.iter().filter(|q| {
        q.priority == Priority::Urgent
            && !matches!(q.status, QueueJobStatus::Completed | QueueJobStatus::Cancelled)
    }) {
        out.push(UrgentItem {
            item_type: UrgentType::Booking,
            title: format!("Urgent booking {} \u{2013} {}", q.job_id, q.status.display_name()),
            priority: IssuePriority::High,
            raised_at: q.scheduled_time.clone(),
            detail: q.detail_ref(),
        });
    }

    for p in s.payouts.iter().filter(|p| p.status == PayoutStatus::Failed) {
        out.push(UrgentItem {
            item_type: UrgentType::Payment,
            title: format!("Failed payout to {} \u{2013} retry required", p.professional_name),
            priority: IssuePriority::Medium,
            raised_at: p.processed_at.clone().unwrap_or_default(),
            detail: p.detail_ref(),
        });
    }

    for t in s.support_tickets.iter().filter(|t| t.is_urgent_open()) {
        out.push(UrgentItem {
            item_type: UrgentType::Support,
            title: format!("{}: {}", t.ticket_id, t.subject),
            priority: IssuePriority::Medium,
            raised_at: t.last_activity_at.clone(),
            detail: t.detail_ref(),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain;

    fn seeded() -> Snapshot {
        Snapshot {
            jobs: domain::a001_job::service::seed(),
            jobs_queue: domain::a002_queue_job::service::seed(),
            professionals: domain::a004_professional::service::seed(),
            companies: domain::a005_company::service::seed(),
            verifications: domain::a006_verification::service::seed(),
            cancellations: domain::a007_cancellation::service::seed(),
            disputes: domain::a008_dispute::service::seed(),
            refunds: domain::a009_refund::service::seed(),
            payments: domain::a010_payment::service::seed(),
            ledger: domain::a011_ledger::service::seed(),
            payouts: domain::a012_payout::service::seed(),
            support_tickets: domain::a013_support_ticket::service::seed(),
        }
    }

    #[test]
    fn test_operational_metrics_from_seed() {
        let m = build(&seeded()).operational;
        assert_eq!(m.total_jobs, 9);
        assert_eq!(m.active_bookings, 3);
        assert_eq!(m.completed_jobs, 2);
        assert_eq!(m.cancellations, 5);
        assert_eq!(m.open_disputes, 3);
        // 1 queue job, 2 professionals, 1 company, 1 refund
        assert_eq!(m.pending_approvals, 5);
    }

    #[test]
    fn test_financial_metrics_from_seed() {
        let f = build(&seeded()).financial;
        assert_eq!(f.gmv, 740.0);
        assert_eq!(f.platform_revenue, 48.0);
        assert_eq!(f.failed_payments, 1);
        assert_eq!(f.refunds, 145.0);
        assert!((f.pending_payouts - 676.6).abs() < 1e-9);
    }

    #[test]
    fn test_urgent_items_high_first_newest_first() {
        let items = build(&seeded()).urgent_items;
        let first_medium = items
            .iter()
            .position(|i| i.priority == IssuePriority::Medium)
            .unwrap();
        assert!(items[first_medium..]
            .iter()
            .all(|i| i.priority == IssuePriority::Medium));
        for pair in items[..first_medium].windows(2) {
            assert!(pair[0].raised_at >= pair[1].raised_at);
        }
        assert!(items
            .iter()
            .any(|i| i.item_type == UrgentType::Support && i.title.starts_with("TKT-2835")));
        assert!(items
            .iter()
            .any(|i| i.item_type == UrgentType::Payment && i.detail.value == "po6"));
    }

    #[test]
    fn test_urgent_titles_use_display_names() {
        let items = build(&seeded()).urgent_items;
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert!(titles.contains(&"Quality issue dispute on J-2828"));
        assert!(titles.contains(&"Urgent booking J-2835 \u{2013} Payment issue"));
    }

    #[test]
    fn test_empty_snapshot() {
        let empty = Snapshot {
            jobs: vec![],
            jobs_queue: vec![],
            professionals: vec![],
            companies: vec![],
            verifications: vec![],
            cancellations: vec![],
            disputes: vec![],
            refunds: vec![],
            payments: vec![],
            ledger: vec![],
            payouts: vec![],
            support_tickets: vec![],
        };
        let response = build(&empty);
        assert_eq!(response.operational, OperationalMetrics::default());
        assert_eq!(response.financial, FinancialMetrics::default());
        assert!(response.urgent_items.is_empty());
    }
}
