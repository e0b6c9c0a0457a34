use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::a001_job::SERVICE_CATEGORIES;
use crate::shared::actions::{NoAction, RowActions};
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::status::StatusDisplay;
use crate::status_enum;

status_enum! {
    pub enum TransactionStatus {
        Success => ("success", "Success", Success),
        Failed => ("failed", "Failed", Danger),
        Pending => ("pending", "Pending", Warning),
        Refunded => ("refunded", "Refunded", Secondary),
    }
}

/// A customer payment for a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub job_id: String,
    pub amount: f64,
    pub status: TransactionStatus,
    pub service_category: String,
    pub date: String,
    pub customer_name: String,
}

/// Body of `GET /api/payments/metrics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMetrics {
    pub total_revenue: f64,
    pub platform_earnings: f64,
    pub processed_transactions: usize,
    pub successful_payments_count: usize,
    pub successful_payments_amount: f64,
    pub failed_payments_count: usize,
    pub failed_payments_amount: f64,
    /// Percent with one decimal
    pub refund_rate: f64,
    pub pending_payouts: f64,
}

impl PaymentMetrics {
    pub fn compute<'a>(
        payments: impl IntoIterator<Item = &'a Payment>,
        platform_earnings: f64,
        pending_payouts: f64,
    ) -> Self {
        let payments: Vec<&Payment> = payments.into_iter().collect();
        let with_status = |status: TransactionStatus| {
            payments
                .iter()
                .filter(move |p| p.status == status)
                .map(|p| p.amount)
        };

        let total = payments.len();
        let refunded = with_status(TransactionStatus::Refunded).count();
        let refund_rate = if total == 0 {
            0.0
        } else {
            (refunded as f64 / total as f64 * 1000.0).round() / 10.0
        };
        let successful_amount: f64 = with_status(TransactionStatus::Success).sum();

        Self {
            total_revenue: successful_amount,
            platform_earnings,
            processed_transactions: total,
            successful_payments_count: with_status(TransactionStatus::Success).count(),
            successful_payments_amount: successful_amount,
            failed_payments_count: with_status(TransactionStatus::Failed).count(),
            failed_payments_amount: with_status(TransactionStatus::Failed).sum(),
            refund_rate,
            pending_payouts,
        }
    }
}

impl RowActions for Payment {
    type Action = NoAction;

    fn available_actions(&self) -> Vec<NoAction> {
        Vec::new()
    }
}

impl AdminAggregate for Payment {
    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "payments"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments Overview"
    }

    fn detail_param() -> &'static str {
        "job"
    }

    fn detail_value(&self) -> &str {
        &self.job_id
    }
}

impl ListRecord for Payment {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.job_id.as_str(), self.customer_name.as_str()]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "service_category" => self.service_category == value,
            "status" => self.status.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.date.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "date" => Some(self.date.cmp(&other.date)),
            "amount" => Some(cmp_f64(self.amount, other.amount)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::date_range("Date range"),
            FilterSpec::select(
                "service_category",
                "All categories",
                SERVICE_CATEGORIES.iter().map(|c| (*c, *c)).collect(),
            ),
            FilterSpec::select("status", "All statuses", TransactionStatus::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search Job ID, customer..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status::tests::assert_total;

    fn payment(id: &str, amount: f64, status: TransactionStatus) -> Payment {
        Payment {
            id: id.into(),
            job_id: format!("J-{}", id),
            amount,
            status,
            service_category: "Plumbing".into(),
            date: "2025-02-16 10:00".into(),
            customer_name: "Emma Wilson".into(),
        }
    }

    #[test]
    fn test_lookups_are_total() {
        assert_total::<TransactionStatus>();
    }

    #[test]
    fn test_metrics() {
        use TransactionStatus::*;
        let rows = vec![
            payment("1", 120.0, Success),
            payment("2", 85.0, Success),
            payment("3", 150.0, Pending),
            payment("4", 75.0, Failed),
            payment("5", 90.0, Refunded),
            payment("6", 95.0, Success),
        ];
        let m = PaymentMetrics::compute(&rows, 48.0, 689.6);
        assert_eq!(m.total_revenue, 300.0);
        assert_eq!(m.successful_payments_count, 3);
        assert_eq!(m.failed_payments_count, 1);
        assert_eq!(m.failed_payments_amount, 75.0);
        assert_eq!(m.processed_transactions, 6);
        assert_eq!(m.refund_rate, 16.7);
        assert_eq!(m.platform_earnings, 48.0);
    }

    #[test]
    fn test_metrics_empty() {
        let m = PaymentMetrics::compute(&Vec::<Payment>::new(), 0.0, 0.0);
        assert_eq!(m, PaymentMetrics::default());
    }
}
