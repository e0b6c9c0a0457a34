use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::a002_queue_job::Priority;
use crate::shared::actions::{ActionError, RowActions};
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{FilterSpec, ListRecord};
use crate::shared::state_machine::StatusMachine;
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

const PREVIEW_LEN: usize = 120;

status_enum! {
    pub enum TicketStatus {
        Open => ("open", "Open", Danger),
        InProgress => ("in_progress", "In progress", Primary),
        WaitingCustomer => ("waiting_customer", "Waiting on customer", Warning),
        Resolved => ("resolved", "Resolved", Success),
        Closed => ("closed", "Closed", Secondary),
    }
}

impl StatusMachine for TicketStatus {
    fn can_transition(from: Self, to: Self) -> bool {
        use TicketStatus::*;
        matches!(
            (from, to),
            (Open, InProgress | WaitingCustomer | Resolved | Closed)
                | (InProgress, WaitingCustomer | Resolved | Closed)
                | (WaitingCustomer, InProgress | Resolved | Closed)
                | (Resolved, Closed | InProgress)
        )
    }
}

status_enum! {
    pub enum SubmittedByType {
        Customer => ("customer", "Customer", Info),
        Professional => ("professional", "Professional", Warning),
    }
}

action_enum! {
    pub enum TicketAction {
        Respond => ("respond", "Respond / View conversation", Normal, [required(Note, "Reply")]),
        Escalate => ("escalate", "Escalate", Danger, []),
        Assign => ("assign", "Assign internally", Normal, [required(Value, "Agent name")]),
        UpdateStatus => ("update_status", "Update status", Normal, [
            required(Value, "Status (open, in_progress, waiting_customer, resolved, closed)")
        ]),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub ticket_id: String,
    pub subject: String,
    pub submitted_by_type: SubmittedByType,
    pub submitted_by_name: String,
    pub submitted_by_email: String,
    pub related_job_id: Option<String>,
    /// e.g. "Customer account" or "Pro: Mike Johnson"
    pub related_account_label: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub message_count: u32,
    pub last_message_preview: String,
    pub last_activity_at: String,
    pub assigned_to: Option<String>,
}

impl SupportTicket {
    /// Records an operator reply; an open ticket moves to in progress.
    pub fn respond(&mut self, note: &str, at: String) -> Result<(), ActionError> {
        if self.status == TicketStatus::Open {
            self.status = self.status.transition(TicketStatus::InProgress)?;
        }
        self.message_count += 1;
        self.last_message_preview = note.chars().take(PREVIEW_LEN).collect();
        self.last_activity_at = at;
        Ok(())
    }

    pub fn set_status(&mut self, code: &str) -> Result<(), ActionError> {
        let to = TicketStatus::from_code(code)
            .ok_or_else(|| ActionError::InvalidParam(format!("unknown status '{}'", code)))?;
        self.status = self.status.transition(to)?;
        Ok(())
    }

    pub fn is_urgent_open(&self) -> bool {
        self.priority == Priority::Urgent
            && !matches!(self.status, TicketStatus::Resolved | TicketStatus::Closed)
    }
}

impl RowActions for SupportTicket {
    type Action = TicketAction;

    fn available_actions(&self) -> Vec<TicketAction> {
        if self.status == TicketStatus::Closed {
            return Vec::new();
        }
        let mut actions = vec![TicketAction::Respond];
        if self.priority != Priority::Urgent {
            actions.push(TicketAction::Escalate);
        }
        actions.push(TicketAction::Assign);
        if !self.status.is_terminal() {
            actions.push(TicketAction::UpdateStatus);
        }
        actions
    }
}

impl AdminAggregate for SupportTicket {
    fn aggregate_index() -> &'static str {
        "a013"
    }

    fn collection_name() -> &'static str {
        "support-tickets"
    }

    fn element_name() -> &'static str {
        "Ticket"
    }

    fn list_name() -> &'static str {
        "Support Tickets Inbox"
    }

    fn detail_param() -> &'static str {
        "ticket"
    }

    fn detail_value(&self) -> &str {
        &self.ticket_id
    }
}

impl ListRecord for SupportTicket {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.ticket_id.as_str(),
            self.subject.as_str(),
            self.submitted_by_name.as_str(),
            self.submitted_by_email.as_str(),
        ]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "status" => self.status.code() == value,
            "priority" => self.priority.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.last_activity_at.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "last_activity_at" => Some(self.last_activity_at.cmp(&other.last_activity_at)),
            "priority" => Some(self.priority.rank().cmp(&other.priority.rank())),
            "message_count" => Some(self.message_count.cmp(&other.message_count)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("status", "All statuses", TicketStatus::options()),
            FilterSpec::select("priority", "All priorities", Priority::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search ticket ID, subject, or user..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::tests::codes;
    use crate::shared::state_machine::tests::assert_edges;
    use crate::shared::status::tests::assert_total;

    fn ticket(status: TicketStatus, priority: Priority) -> SupportTicket {
        SupportTicket {
            id: "2".into(),
            ticket_id: "TKT-2839".into(),
            subject: "Cannot update availability calendar".into(),
            submitted_by_type: SubmittedByType::Professional,
            submitted_by_name: "Mike Johnson".into(),
            submitted_by_email: "mike.j@example.com".into(),
            related_job_id: None,
            related_account_label: "Pro: Mike Johnson".into(),
            priority,
            status,
            message_count: 1,
            last_message_preview: "The calendar page shows an error.".into(),
            last_activity_at: "2025-02-16 10:00".into(),
            assigned_to: None,
        }
    }

    #[test]
    fn test_lookups_and_machine() {
        assert_total::<TicketStatus>();
        assert_total::<SubmittedByType>();
        use TicketStatus::*;
        assert_edges(&[
            (Open, InProgress),
            (Open, WaitingCustomer),
            (Open, Resolved),
            (Open, Closed),
            (InProgress, WaitingCustomer),
            (InProgress, Resolved),
            (InProgress, Closed),
            (WaitingCustomer, InProgress),
            (WaitingCustomer, Resolved),
            (WaitingCustomer, Closed),
            (Resolved, Closed),
            (Resolved, InProgress),
        ]);
        assert!(Closed.is_terminal());
    }

    #[test]
    fn test_respond_moves_open_to_in_progress() {
        let mut t = ticket(TicketStatus::Open, Priority::Medium);
        t.respond("Looking into it", "2025-02-17 09:00".into()).unwrap();
        assert_eq!(t.status, TicketStatus::InProgress);
        assert_eq!(t.message_count, 2);
        assert_eq!(t.last_message_preview, "Looking into it");
        assert_eq!(t.last_activity_at, "2025-02-17 09:00");

        let mut t = ticket(TicketStatus::WaitingCustomer, Priority::Medium);
        t.respond("Any update?", "2025-02-17 09:00".into()).unwrap();
        assert_eq!(t.status, TicketStatus::WaitingCustomer);
    }

    #[test]
    fn test_set_status_checks_machine() {
        let mut t = ticket(TicketStatus::Resolved, Priority::Low);
        assert!(matches!(t.set_status("open"), Err(ActionError::Transition(_))));
        assert!(matches!(t.set_status("bogus"), Err(ActionError::InvalidParam(_))));
        t.set_status("closed").unwrap();
        assert!(t.available_actions().is_empty());
    }

    #[test]
    fn test_gating() {
        let t = ticket(TicketStatus::Open, Priority::Urgent);
        assert_eq!(codes(&t.available_actions()), vec!["respond", "assign", "update_status"]);
        assert!(t.is_urgent_open());
        let t = ticket(TicketStatus::InProgress, Priority::High);
        assert_eq!(
            codes(&t.available_actions()),
            vec!["respond", "escalate", "assign", "update_status"]
        );
    }
}
