use contracts::domain::a001_job::{Job, JobStatus, PaymentStatus};
use contracts::shared::actions::{ActionError, ActionParams, NoAction};
use contracts::shared::format::format_currency;
use contracts::shared::status::StatusDisplay;

use crate::shared::actions::ApplyAction;
use crate::shared::csv_export::CsvRow;

/// Jobs list is read-only
impl ApplyAction for Job {
    fn apply(&mut self, action: NoAction, _params: &ActionParams) -> Result<(), ActionError> {
        match action {}
    }
}

impl CsvRow for Job {
    const HEADER: &'static [&'static str] = &[
        "Job ID",
        "Customer",
        "Service",
        "Location",
        "Scheduled",
        "Price",
        "Payment",
        "Status",
        "Professional",
        "Created",
    ];

    fn record(&self) -> Vec<String> {
        vec![
            self.job_id.clone(),
            self.customer_name.clone(),
            self.service_category.clone(),
            self.location.clone(),
            self.scheduled_time.clone(),
            format_currency(self.price),
            self.payment_status.display_name().to_string(),
            self.job_status.display_name().to_string(),
            self.assigned_professional.clone().unwrap_or_default(),
            self.created_at.clone(),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    job_id: &str,
    customer: &str,
    category: &str,
    location: &str,
    scheduled: &str,
    price: f64,
    payment: PaymentStatus,
    status: JobStatus,
    professional: Option<&str>,
    created: &str,
) -> Job {
    Job {
        id: id.into(),
        job_id: job_id.into(),
        customer_name: customer.into(),
        service_category: category.into(),
        location: location.into(),
        scheduled_time: scheduled.into(),
        price,
        payment_status: payment,
        job_status: status,
        assigned_professional: professional.map(Into::into),
        created_at: created.into(),
    }
}

pub fn seed() -> Vec<Job> {
    use JobStatus::*;
    use PaymentStatus::*;
    vec![
        job("1", "J-2841", "Sarah Mitchell", "Home Cleaning", "Downtown, North District", "2025-02-15 10:00", 120.0, Paid, Scheduled, None, "2025-02-14"),
        job("2", "J-2839", "James Chen", "AC Repair", "Central", "2025-02-15 14:30", 85.0, Paid, InProgress, Some("Mike Johnson"), "2025-02-13"),
        job("3", "J-2835", "Emma Wilson", "Plumbing", "West, South", "2025-02-16 09:00", 150.0, Pending, PaymentIssue, None, "2025-02-14"),
        job("4", "J-2832", "David Brown", "Electrical", "East Side", "2025-02-16 11:00", 95.0, Paid, RescheduleRequest, Some("Alex Rivera"), "2025-02-12"),
        job("5", "J-2828", "Lisa Anderson", "Carpentry", "North District", "2025-02-15 16:00", 200.0, Paid, Completed, Some("David Kim"), "2025-02-10"),
        job("6", "J-2825", "Robert Lee", "Pest Control", "Central, Downtown", "2025-02-17 08:00", 75.0, Paid, Scheduled, Some("Chris Taylor"), "2025-02-14"),
        job("7", "J-2820", "Maria Garcia", "Painting", "All areas", "2025-02-16 13:00", 320.0, Pending, Unassigned, None, "2025-02-15"),
        job("8", "J-2815", "Tom Harris", "HVAC", "Downtown", "2025-02-14 09:00", 110.0, Paid, Completed, Some("Mike Johnson"), "2025-02-11"),
        job("9", "J-2810", "Anna Bell", "Home Cleaning", "North District", "2025-02-12 10:00", 90.0, Refunded, Cancelled, None, "2025-02-09"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::listing::{filter_sorted, ListQuery};

    #[test]
    fn test_seed_matches_jobs_list() {
        let jobs = seed();
        assert_eq!(jobs.len(), 9);
        assert_eq!(jobs[0].job_id, "J-2841");
        assert_eq!(jobs.iter().filter(|j| j.is_active_booking()).count(), 3);
    }

    #[test]
    fn test_filtered_export_rows() {
        let jobs = seed();
        let mut query = ListQuery::default();
        query.set_filter("assigned_professional", "Mike Johnson");
        let rows = filter_sorted(&jobs, &query);
        let ids: Vec<&str> = rows.iter().map(|j| j.job_id.as_str()).collect();
        assert_eq!(ids, vec!["J-2839", "J-2815"]);
        assert_eq!(rows[0].record()[5], "$85.00");
        assert_eq!(rows[0].record().len(), Job::HEADER.len());
    }
}
