use serde::{Deserialize, Serialize};

use crate::shared::detail::DetailRef;
use crate::status_enum;

/// Response of `GET /api/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub operational: OperationalMetrics,
    pub financial: FinancialMetrics,
    pub urgent_items: Vec<UrgentItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationalMetrics {
    pub total_jobs: usize,
    /// Scheduled plus in progress
    pub active_bookings: usize,
    pub pending_approvals: usize,
    pub completed_jobs: usize,
    pub cancellations: usize,
    /// Open, under review or awaiting info
    pub open_disputes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Sum of payment amounts except failed ones
    pub gmv: f64,
    pub platform_revenue: f64,
    pub failed_payments: usize,
    /// Approved full and partial refunds
    pub refunds: f64,
    pub pending_payouts: f64,
}

status_enum! {
    pub enum UrgentType {
        Dispute => ("dispute", "Dispute", Danger),
        Approval => ("approval", "Approval", Warning),
        Payment => ("payment", "Payment", Primary),
        Booking => ("booking", "Booking", Info),
        Support => ("support", "Support", Secondary),
    }
}

status_enum! {
    pub enum IssuePriority {
        High => ("high", "High", Danger),
        Medium => ("medium", "Medium", Warning),
    }
}

/// One row of the "High-priority issues" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgentItem {
    #[serde(rename = "type")]
    pub item_type: UrgentType,
    pub title: String,
    pub priority: IssuePriority,
    pub raised_at: String,
    pub detail: DetailRef,
}

/// High before medium, newest first within a priority
pub fn sort_urgent(items: &mut [UrgentItem]) {
    items.sort_by(|a, b| {
        let rank = |p: IssuePriority| match p {
            IssuePriority::High => 0,
            IssuePriority::Medium => 1,
        };
        rank(a.priority)
            .cmp(&rank(b.priority))
            .then_with(|| b.raised_at.cmp(&a.raised_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status::tests::assert_total;

    fn item(title: &str, priority: IssuePriority, at: &str) -> UrgentItem {
        UrgentItem {
            item_type: UrgentType::Dispute,
            title: title.into(),
            priority,
            raised_at: at.into(),
            detail: DetailRef::new("dispute", title),
        }
    }

    #[test]
    fn test_lookups_are_total() {
        assert_total::<UrgentType>();
        assert_total::<IssuePriority>();
    }

    #[test]
    fn test_sort_urgent() {
        let mut items = vec![
            item("a", IssuePriority::Medium, "2025-02-16 10:00"),
            item("b", IssuePriority::High, "2025-02-14 10:00"),
            item("c", IssuePriority::High, "2025-02-15 10:00"),
            item("d", IssuePriority::Medium, "2025-02-17 10:00"),
        ];
        sort_urgent(&mut items);
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b", "d", "a"]);
    }
}
