use contracts::domain::a010_payment::{Payment, TransactionStatus};
use contracts::shared::actions::{ActionError, ActionParams, NoAction};

use crate::shared::actions::ApplyAction;

/// Payments are read-only
impl ApplyAction for Payment {
    fn apply(&mut self, action: NoAction, _params: &ActionParams) -> Result<(), ActionError> {
        match action {}
    }
}

fn payment(
    id: &str,
    job_id: &str,
    amount: f64,
    status: TransactionStatus,
    service_category: &str,
    date: &str,
    customer_name: &str,
) -> Payment {
    Payment {
        id: id.into(),
        job_id: job_id.into(),
        amount,
        status,
        service_category: service_category.into(),
        date: date.into(),
        customer_name: customer_name.into(),
    }
}

pub fn seed() -> Vec<Payment> {
    use TransactionStatus::*;
    vec![
        payment("t1", "J-2841", 120.0, Success, "Home Cleaning", "2025-02-16 10:00", "Sarah Mitchell"),
        payment("t2", "J-2839", 85.0, Success, "AC Repair", "2025-02-16 14:30", "James Chen"),
        payment("t3", "J-2835", 150.0, Pending, "Plumbing", "2025-02-16 09:00", "Emma Wilson"),
        payment("t4", "J-2832", 95.0, Success, "Electrical", "2025-02-15 11:00", "David Brown"),
        payment("t5", "J-2828", 200.0, Success, "Carpentry", "2025-02-15 16:00", "Lisa Anderson"),
        payment("t6", "J-2825", 75.0, Failed, "Pest Control", "2025-02-15 08:00", "Robert Lee"),
        payment("t7", "J-2810", 90.0, Refunded, "Home Cleaning", "2025-02-12 09:15", "Anna Bell"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a010_payment::PaymentMetrics;
    use contracts::shared::listing::{apply_query, ListQuery};

    #[test]
    fn test_metrics_over_seed() {
        let payments = seed();
        let metrics = PaymentMetrics::compute(&payments, 48.0, 559.6);
        assert_eq!(metrics.processed_transactions, 7);
        assert_eq!(metrics.successful_payments_count, 4);
        assert_eq!(metrics.successful_payments_amount, 500.0);
        assert_eq!(metrics.total_revenue, 500.0);
        assert_eq!(metrics.failed_payments_count, 1);
        assert_eq!(metrics.failed_payments_amount, 75.0);
        assert_eq!(metrics.refund_rate, 14.3);
        assert_eq!(metrics.platform_earnings, 48.0);
    }

    #[test]
    fn test_status_filter() {
        let payments = seed();
        let mut query = ListQuery::default();
        query.filters.insert("status".into(), "success".into());
        let page = apply_query(&payments, &query);
        assert_eq!(page.total, 4);
    }
}
