use contracts::domain::a002_queue_job::Priority;
use contracts::domain::a013_support_ticket::{SubmittedByType, SupportTicket, TicketAction, TicketStatus};
use contracts::shared::actions::{ActionError, ActionParams};

use crate::shared::actions::ApplyAction;

fn now_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

impl ApplyAction for SupportTicket {
    fn apply(&mut self, action: TicketAction, params: &ActionParams) -> Result<(), ActionError> {
        match action {
            TicketAction::Respond => {
                let note = params.note().ok_or(ActionError::MissingParam("note"))?;
                self.respond(note, now_stamp())?;
            }
            TicketAction::Escalate => {
                self.priority = self.priority.raised();
                tracing::info!("Ticket {} escalated to {:?}", self.ticket_id, self.priority);
            }
            TicketAction::Assign => {
                self.assigned_to = Some(params.value()?.trim().to_string());
            }
            TicketAction::UpdateStatus => {
                self.set_status(params.value()?.trim())?;
                self.last_activity_at = now_stamp();
            }
        }
        Ok(())
    }
}

struct Submitter<'a> {
    kind: SubmittedByType,
    name: &'a str,
    email: &'a str,
    account: &'a str,
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: &str,
    ticket_id: &str,
    subject: &str,
    by: Submitter<'_>,
    related_job_id: Option<&str>,
    priority: Priority,
    status: TicketStatus,
    message_count: u32,
    preview: &str,
    last_activity_at: &str,
    assigned_to: Option<&str>,
) -> SupportTicket {
    SupportTicket {
        id: id.into(),
        ticket_id: ticket_id.into(),
        subject: subject.into(),
        submitted_by_type: by.kind,
        submitted_by_name: by.name.into(),
        submitted_by_email: by.email.into(),
        related_job_id: related_job_id.map(Into::into),
        related_account_label: by.account.into(),
        priority,
        status,
        message_count,
        last_message_preview: preview.into(),
        last_activity_at: last_activity_at.into(),
        assigned_to: assigned_to.map(Into::into),
    }
}

pub fn seed() -> Vec<SupportTicket> {
    use SubmittedByType::{Customer, Professional};
    const AGENT: Option<&str> = Some("Support Agent");
    let customer = |name, email| Submitter {
        kind: Customer,
        name,
        email,
        account: "Customer account",
    };
    vec![
        ticket(
            "1",
            "TKT-2841",
            "Payment not reflecting after job completion",
            customer("Sarah Mitchell", "sarah.m@example.com"),
            Some("J-2841"),
            Priority::High,
            TicketStatus::InProgress,
            4,
            "Thank you for looking into this. I still don't see the refund...",
            "2025-02-16 11:30",
            AGENT,
        ),
        ticket(
            "2",
            "TKT-2839",
            "Cannot update availability calendar",
            Submitter {
                kind: Professional,
                name: "Mike Johnson",
                email: "mike.j@example.com",
                account: "Pro: Mike Johnson",
            },
            None,
            Priority::Medium,
            TicketStatus::Open,
            1,
            "The calendar page shows an error when I try to block dates.",
            "2025-02-16 10:00",
            None,
        ),
        ticket(
            "3",
            "TKT-2835",
            "Request to cancel and refund J-2835",
            customer("Emma Wilson", "emma.w@example.com"),
            Some("J-2835"),
            Priority::Urgent,
            TicketStatus::Open,
            2,
            "I need to cancel due to emergency. Please process refund.",
            "2025-02-16 09:15",
            None,
        ),
        ticket(
            "4",
            "TKT-2830",
            "Payout delay \u{2013} when will I receive payment?",
            Submitter {
                kind: Professional,
                name: "Alex Rivera",
                email: "alex.r@example.com",
                account: "Pro: Alex Rivera",
            },
            None,
            Priority::High,
            TicketStatus::WaitingCustomer,
            6,
            "We have requested your bank confirmation. Please reply with the details.",
            "2025-02-15 16:00",
            AGENT,
        ),
        ticket(
            "5",
            "TKT-2825",
            "Issue with job completion rating",
            Submitter {
                kind: Professional,
                name: "David Kim",
                email: "david.k@example.com",
                account: "Job J-2828",
            },
            Some("J-2828"),
            Priority::Low,
            TicketStatus::Resolved,
            3,
            "Resolved: rating corrected after review.",
            "2025-02-14 14:00",
            AGENT,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::actions::RowActions;

    fn find(id: &str) -> SupportTicket {
        seed().into_iter().find(|t| t.id == id).unwrap()
    }

    #[test]
    fn test_seed_has_one_urgent_open_ticket() {
        let urgent: Vec<_> = seed().into_iter().filter(|t| t.is_urgent_open()).collect();
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].ticket_id, "TKT-2835");
        assert!(!urgent[0].is_available(TicketAction::Escalate));
    }

    #[test]
    fn test_respond_moves_open_ticket_in_progress() {
        let mut t = find("2");
        let params = ActionParams {
            note: Some("Could you share a screenshot?".into()),
            ..ActionParams::default()
        };
        t.apply(TicketAction::Respond, &params).unwrap();
        assert_eq!(t.status, TicketStatus::InProgress);
        assert_eq!(t.message_count, 2);
        assert_eq!(t.last_message_preview, "Could you share a screenshot?");
    }

    #[test]
    fn test_escalate_raises_priority() {
        let mut t = find("2");
        t.apply(TicketAction::Escalate, &ActionParams::default()).unwrap();
        assert_eq!(t.priority, Priority::High);
    }

    #[test]
    fn test_update_status_rejects_unknown_and_illegal() {
        let mut t = find("5");
        let value = |v: &str| ActionParams {
            value: Some(v.into()),
            ..ActionParams::default()
        };
        assert!(matches!(
            t.apply(TicketAction::UpdateStatus, &value("archived")),
            Err(ActionError::InvalidParam(_))
        ));
        assert!(matches!(
            t.apply(TicketAction::UpdateStatus, &value("open")),
            Err(ActionError::Transition(_))
        ));
        t.apply(TicketAction::UpdateStatus, &value("closed")).unwrap();
        assert_eq!(t.status, TicketStatus::Closed);
        assert!(t.available_actions().is_empty());
    }
}
