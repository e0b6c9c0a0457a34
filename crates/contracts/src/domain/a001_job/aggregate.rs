use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::actions::{NoAction, RowActions};
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::status::StatusDisplay;
use crate::status_enum;

status_enum! {
    pub enum JobStatus {
        Scheduled => ("scheduled", "Scheduled", Info),
        InProgress => ("in_progress", "In progress", Primary),
        Completed => ("completed", "Completed", Success),
        Cancelled => ("cancelled", "Cancelled", Secondary),
        PendingApproval => ("pending_approval", "Pending approval", Warning),
        Unassigned => ("unassigned", "Unassigned", Warning),
        RescheduleRequest => ("reschedule_request", "Reschedule request", Info),
        PaymentIssue => ("payment_issue", "Payment issue", Danger),
    }
}

status_enum! {
    pub enum PaymentStatus {
        Paid => ("paid", "Paid", Success),
        Pending => ("pending", "Pending", Warning),
        Failed => ("failed", "Failed", Danger),
        Refunded => ("refunded", "Refunded", Secondary),
    }
}

pub const SERVICE_CATEGORIES: &[&str] = &[
    "Home Cleaning",
    "AC Repair",
    "Plumbing",
    "Electrical",
    "Carpentry",
    "Pest Control",
    "Painting",
    "HVAC",
];

pub const ASSIGNABLE_PROFESSIONALS: &[&str] =
    &["Mike Johnson", "Alex Rivera", "David Kim", "Chris Taylor"];

fn same_options(values: &'static [&'static str]) -> Vec<(&'static str, &'static str)> {
    values.iter().map(|v| (*v, *v)).collect()
}

/// A booking as listed in the jobs list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub job_id: String,
    pub customer_name: String,
    pub service_category: String,
    pub location: String,
    pub scheduled_time: String,
    pub price: f64,
    pub payment_status: PaymentStatus,
    pub job_status: JobStatus,
    pub assigned_professional: Option<String>,
    pub created_at: String,
}

impl Job {
    /// Booked and not yet finished
    pub fn is_active_booking(&self) -> bool {
        matches!(self.job_status, JobStatus::Scheduled | JobStatus::InProgress)
    }
}

impl AdminAggregate for Job {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "jobs"
    }

    fn element_name() -> &'static str {
        "Job"
    }

    fn list_name() -> &'static str {
        "Jobs List"
    }

    fn detail_param() -> &'static str {
        "job"
    }

    fn detail_value(&self) -> &str {
        &self.job_id
    }
}

impl RowActions for Job {
    type Action = NoAction;

    fn available_actions(&self) -> Vec<NoAction> {
        Vec::new()
    }
}

impl ListRecord for Job {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.job_id.as_str(), self.customer_name.as_str()]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "job_status" => self.job_status.code() == value,
            "payment_status" => self.payment_status.code() == value,
            "service_category" => self.service_category == value,
            "assigned_professional" => self.assigned_professional.as_deref() == Some(value),
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.scheduled_time.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "job_id" => Some(self.job_id.cmp(&other.job_id)),
            "customer_name" => Some(self.customer_name.cmp(&other.customer_name)),
            "scheduled_time" => Some(self.scheduled_time.cmp(&other.scheduled_time)),
            "price" => Some(cmp_f64(self.price, other.price)),
            "job_status" => Some(self.job_status.display_name().cmp(other.job_status.display_name())),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("job_status", "All statuses", JobStatus::options()),
            FilterSpec::select("payment_status", "All payment", PaymentStatus::options()),
            FilterSpec::select("service_category", "All categories", same_options(SERVICE_CATEGORIES)),
            FilterSpec::select(
                "assigned_professional",
                "Any professional",
                same_options(ASSIGNABLE_PROFESSIONALS),
            ),
            FilterSpec::date_range("Date"),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search Job ID, customer..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::{apply_query, ListQuery};
    use crate::shared::status::tests::assert_total;

    fn job(id: &str, status: JobStatus, pro: Option<&str>) -> Job {
        Job {
            id: id.into(),
            job_id: format!("J-{}", id),
            customer_name: "Sarah Mitchell".into(),
            service_category: "Plumbing".into(),
            location: "Central".into(),
            scheduled_time: "2025-02-15 10:00".into(),
            price: 120.0,
            payment_status: PaymentStatus::Paid,
            job_status: status,
            assigned_professional: pro.map(Into::into),
            created_at: "2025-02-14".into(),
        }
    }

    #[test]
    fn test_lookups_are_total() {
        assert_total::<JobStatus>();
        assert_total::<PaymentStatus>();
        assert_eq!(JobStatus::InProgress.display_name(), "In progress");
        assert_eq!(PaymentStatus::Refunded.badge().code(), "secondary");
    }

    #[test]
    fn test_filters_by_professional_and_status() {
        let rows = vec![
            job("1", JobStatus::Scheduled, None),
            job("2", JobStatus::InProgress, Some("Mike Johnson")),
            job("3", JobStatus::Completed, Some("Mike Johnson")),
        ];
        let mut query = ListQuery::default();
        query.set_filter("assigned_professional", "Mike Johnson");
        assert_eq!(apply_query(&rows, &query).total, 2);

        query.set_filter("job_status", "completed");
        let page = apply_query(&rows, &query);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "3");
    }

    #[test]
    fn test_tab_key_and_detail() {
        assert_eq!(Job::full_name(), "a001_jobs");
        let j = job("7", JobStatus::Unassigned, None);
        assert_eq!(j.detail_ref().to_query(), "job=J-7");
        assert!(j.available_actions().is_empty());
    }
}
