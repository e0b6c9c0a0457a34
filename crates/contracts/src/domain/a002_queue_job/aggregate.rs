use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::actions::RowActions;
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{FilterSpec, ListRecord};
use crate::shared::state_machine::StatusMachine;
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

status_enum! {
    pub enum QueueJobStatus {
        PendingApproval => ("pending_approval", "Pending approval", Warning),
        Unassigned => ("unassigned", "Unassigned", Info),
        Active => ("active", "Active", Success),
        RescheduleRequest => ("reschedule_request", "Reschedule request", Primary),
        PaymentIssue => ("payment_issue", "Payment issue", Danger),
        VerificationIssue => ("verification_issue", "Verification issue", Danger),
        Urgent => ("urgent", "Urgent", Danger),
        Cancelled => ("cancelled", "Cancelled", Secondary),
        Completed => ("completed", "Completed", Success),
    }
}

impl StatusMachine for QueueJobStatus {
    fn can_transition(from: Self, to: Self) -> bool {
        use QueueJobStatus::*;
        matches!(
            (from, to),
            (Unassigned, PendingApproval)
                | (Unassigned, Cancelled)
                | (PendingApproval, Active)
                | (PendingApproval, Cancelled)
                | (Active, Completed)
                | (Active, Cancelled)
                | (RescheduleRequest | PaymentIssue | VerificationIssue | Urgent, Active)
                | (RescheduleRequest | PaymentIssue | VerificationIssue | Urgent, Cancelled)
        )
    }
}

impl QueueJobStatus {
    /// Flagged states that need an operator before the job can go on
    pub fn is_exception(self) -> bool {
        use QueueJobStatus::*;
        matches!(self, RescheduleRequest | PaymentIssue | VerificationIssue | Urgent)
    }
}

status_enum! {
    /// Shared by the jobs queue and support tickets
    pub enum Priority {
        Low => ("low", "Low", Secondary),
        Medium => ("medium", "Medium", Info),
        High => ("high", "High", Warning),
        Urgent => ("urgent", "Urgent", Danger),
    }
}

impl Priority {
    /// One level up, saturating at urgent
    pub fn raised(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High | Priority::Urgent => Priority::Urgent,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
            Priority::Urgent => 3,
        }
    }
}

action_enum! {
    pub enum QueueJobAction {
        Approve => ("approve", "Approve", Normal, []),
        Assign => ("assign", "Assign", Normal, [required(Target, "Professional name")]),
        Reassign => ("reassign", "Reassign", Normal, [required(Target, "New professional name")]),
        Resume => ("resume", "Resume", Normal, []),
        Escalate => ("escalate", "Escalate", Normal, []),
        Complete => ("complete", "Mark completed", Normal, []),
        Cancel => ("cancel", "Cancel job", Danger, [optional(Note, "Cancellation note")]),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueJob {
    pub id: String,
    pub job_id: String,
    pub customer_name: String,
    pub service_category: String,
    pub scheduled_time: String,
    pub assigned_professional: Option<String>,
    pub status: QueueJobStatus,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl RowActions for QueueJob {
    type Action = QueueJobAction;

    fn available_actions(&self) -> Vec<QueueJobAction> {
        if self.status.is_terminal() {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if self.status == QueueJobStatus::PendingApproval {
            actions.push(QueueJobAction::Approve);
        }
        let unstaffed = self.assigned_professional.is_none();
        if self.status == QueueJobStatus::Unassigned || (self.status.is_exception() && unstaffed) {
            actions.push(QueueJobAction::Assign);
        }
        if !unstaffed {
            actions.push(QueueJobAction::Reassign);
        }
        if self.status.is_exception() && !unstaffed {
            actions.push(QueueJobAction::Resume);
        }
        if self.priority != Priority::Urgent {
            actions.push(QueueJobAction::Escalate);
        }
        if self.status == QueueJobStatus::Active {
            actions.push(QueueJobAction::Complete);
        }
        actions.push(QueueJobAction::Cancel);
        actions
    }
}

impl AdminAggregate for QueueJob {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "jobs-queue"
    }

    fn element_name() -> &'static str {
        "Queued job"
    }

    fn list_name() -> &'static str {
        "Live Operations"
    }

    fn detail_param() -> &'static str {
        "job"
    }

    fn detail_value(&self) -> &str {
        &self.job_id
    }
}

impl ListRecord for QueueJob {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.job_id.as_str(), self.customer_name.as_str()]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "status" => self.status.code() == value,
            "priority" => self.priority.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.scheduled_time.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "job_id" => Some(self.job_id.cmp(&other.job_id)),
            "scheduled_time" => Some(self.scheduled_time.cmp(&other.scheduled_time)),
            "priority" => Some(self.priority.rank().cmp(&other.priority.rank())),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("status", "All statuses", QueueJobStatus::options()),
            FilterSpec::select("priority", "All priorities", Priority::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search by Job ID or customer..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::tests::codes;
    use crate::shared::state_machine::tests::assert_edges;
    use crate::shared::status::tests::assert_total;
    use QueueJobStatus::*;

    fn queued(status: QueueJobStatus, pro: Option<&str>, priority: Priority) -> QueueJob {
        QueueJob {
            id: "1".into(),
            job_id: "J-2841".into(),
            customer_name: "Sarah Mitchell".into(),
            service_category: "Home Cleaning".into(),
            scheduled_time: "2025-02-15 10:00".into(),
            assigned_professional: pro.map(Into::into),
            status,
            priority,
            flag: None,
        }
    }

    #[test]
    fn test_lookups_are_total() {
        assert_total::<QueueJobStatus>();
        assert_total::<Priority>();
        assert_eq!(Unassigned.display_name(), "Unassigned");
    }

    #[test]
    fn test_machine_edges() {
        let mut edges = vec![
            (Unassigned, PendingApproval),
            (Unassigned, Cancelled),
            (PendingApproval, Active),
            (PendingApproval, Cancelled),
            (Active, Completed),
            (Active, Cancelled),
        ];
        for from in [RescheduleRequest, PaymentIssue, VerificationIssue, Urgent] {
            edges.push((from, Active));
            edges.push((from, Cancelled));
        }
        assert_edges(&edges);
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Active.is_terminal());
    }

    #[test]
    fn test_unassigned_offers_assign_active_does_not() {
        let job = queued(Unassigned, None, Priority::High);
        assert_eq!(codes(&job.available_actions()), vec!["assign", "escalate", "cancel"]);

        let job = queued(Active, Some("Mike Johnson"), Priority::Medium);
        let actions = job.available_actions();
        assert!(!actions.contains(&QueueJobAction::Assign));
        assert!(actions.contains(&QueueJobAction::Reassign));
        assert!(actions.contains(&QueueJobAction::Complete));
    }

    #[test]
    fn test_pending_approval_and_terminal_gating() {
        let job = queued(PendingApproval, Some("Mike Johnson"), Priority::Urgent);
        assert_eq!(codes(&job.available_actions()), vec!["approve", "reassign", "cancel"]);

        let job = queued(Cancelled, Some("Mike Johnson"), Priority::Low);
        assert!(job.available_actions().is_empty());
    }

    #[test]
    fn test_flagged_jobs_can_be_resolved() {
        let job = queued(PaymentIssue, None, Priority::High);
        assert_eq!(codes(&job.available_actions()), vec!["assign", "escalate", "cancel"]);

        let job = queued(RescheduleRequest, Some("Alex Rivera"), Priority::Medium);
        assert_eq!(
            codes(&job.available_actions()),
            vec!["reassign", "resume", "escalate", "cancel"]
        );

        assert!(Urgent.is_exception());
        assert!(!Unassigned.is_exception());
        assert!(!Active.is_exception());
    }

    #[test]
    fn test_priority_raised() {
        assert_eq!(Priority::Low.raised(), Priority::Medium);
        assert_eq!(Priority::High.raised(), Priority::Urgent);
        assert_eq!(Priority::Urgent.raised(), Priority::Urgent);
    }
}
