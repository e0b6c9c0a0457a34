use contracts::domain::a002_queue_job::{Priority, QueueJob, QueueJobAction, QueueJobStatus};
use contracts::shared::actions::{ActionError, ActionParams};
use contracts::shared::state_machine::StatusMachine;

use crate::shared::actions::ApplyAction;

impl ApplyAction for QueueJob {
    fn apply(&mut self, action: QueueJobAction, params: &ActionParams) -> Result<(), ActionError> {
        match action {
            QueueJobAction::Approve => {
                self.status = self.status.transition(QueueJobStatus::Active)?;
            }
            QueueJobAction::Assign => {
                let target = params.target()?;
                let next = if self.status.is_exception() {
                    QueueJobStatus::Active
                } else {
                    QueueJobStatus::PendingApproval
                };
                self.status = self.status.transition(next)?;
                self.assigned_professional = Some(target.to_string());
                if next == QueueJobStatus::Active {
                    self.flag = None;
                }
            }
            QueueJobAction::Reassign => {
                let target = params.target()?;
                if self.assigned_professional.as_deref() == Some(target) {
                    return Err(ActionError::InvalidParam(format!(
                        "{} is already assigned",
                        target
                    )));
                }
                self.assigned_professional = Some(target.to_string());
            }
            QueueJobAction::Resume => {
                self.status = self.status.transition(QueueJobStatus::Active)?;
                self.flag = None;
            }
            QueueJobAction::Escalate => {
                self.priority = Priority::Urgent;
            }
            QueueJobAction::Complete => {
                self.status = self.status.transition(QueueJobStatus::Completed)?;
                self.flag = None;
            }
            QueueJobAction::Cancel => {
                self.status = self.status.transition(QueueJobStatus::Cancelled)?;
                if let Some(note) = params.note() {
                    tracing::info!("Job {} cancelled: {}", self.job_id, note);
                }
            }
        }
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn queue_job(
    id: &str,
    job_id: &str,
    customer: &str,
    category: &str,
    scheduled: &str,
    professional: Option<&str>,
    status: QueueJobStatus,
    priority: Priority,
    flag: Option<&str>,
) -> QueueJob {
    QueueJob {
        id: id.into(),
        job_id: job_id.into(),
        customer_name: customer.into(),
        service_category: category.into(),
        scheduled_time: scheduled.into(),
        assigned_professional: professional.map(Into::into),
        status,
        priority,
        flag: flag.map(Into::into),
    }
}

pub fn seed() -> Vec<QueueJob> {
    use Priority::*;
    use QueueJobStatus::*;
    vec![
        queue_job("1", "J-2841", "Sarah Mitchell", "Home Cleaning", "2025-02-15 10:00", None, Unassigned, High, None),
        queue_job("2", "J-2839", "James Chen", "AC Repair", "2025-02-15 14:30", Some("Mike Johnson"), PendingApproval, Medium, None),
        queue_job("3", "J-2835", "Emma Wilson", "Plumbing", "2025-02-16 09:00", None, PaymentIssue, Priority::Urgent, None),
        queue_job("4", "J-2832", "David Brown", "Electrical", "2025-02-16 11:00", Some("Alex Rivera"), RescheduleRequest, Medium, Some("reschedule")),
        queue_job("5", "J-2828", "Lisa Anderson", "Carpentry", "2025-02-15 16:00", None, VerificationIssue, High, None),
        queue_job("6", "J-2825", "Robert Lee", "Pest Control", "2025-02-17 08:00", Some("Chris Taylor"), QueueJobStatus::Urgent, Priority::Urgent, None),
        queue_job("7", "J-2820", "Maria Garcia", "Painting", "2025-02-16 13:00", None, Unassigned, Low, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::actions::RowActions;

    fn params_with_target(target: &str) -> ActionParams {
        ActionParams {
            target: Some(target.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_assign_moves_to_pending_approval() {
        let mut job = seed().remove(0);
        job.apply(QueueJobAction::Assign, &params_with_target("Mike Johnson"))
            .unwrap();
        assert_eq!(job.status, QueueJobStatus::PendingApproval);
        assert_eq!(job.assigned_professional.as_deref(), Some("Mike Johnson"));
        assert!(job.is_available(QueueJobAction::Approve));
        assert!(!job.is_available(QueueJobAction::Assign));
    }

    #[test]
    fn test_reassign_to_same_professional_is_invalid() {
        let mut job = seed().remove(1);
        let err = job
            .apply(QueueJobAction::Reassign, &params_with_target("Mike Johnson"))
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidParam(_)));
    }

    #[test]
    fn test_escalate_and_complete_lifecycle() {
        let mut job = seed().remove(1);
        job.apply(QueueJobAction::Escalate, &ActionParams::default())
            .unwrap();
        assert_eq!(job.priority, Priority::Urgent);
        assert!(!job.is_available(QueueJobAction::Escalate));

        job.apply(QueueJobAction::Approve, &ActionParams::default())
            .unwrap();
        job.apply(QueueJobAction::Complete, &ActionParams::default())
            .unwrap();
        assert_eq!(job.status, QueueJobStatus::Completed);
        assert!(job.available_actions().is_empty());
    }

    #[test]
    fn test_flagged_jobs_return_to_active() {
        let mut job = seed().remove(2);
        assert!(job.is_available(QueueJobAction::Assign));
        job.apply(QueueJobAction::Assign, &params_with_target("Mike Johnson"))
            .unwrap();
        assert_eq!(job.status, QueueJobStatus::Active);
        assert!(job.is_available(QueueJobAction::Complete));

        let mut job = seed().remove(3);
        assert!(job.is_available(QueueJobAction::Resume));
        job.apply(QueueJobAction::Resume, &ActionParams::default())
            .unwrap();
        assert_eq!(job.status, QueueJobStatus::Active);
        assert_eq!(job.flag, None);
    }

    #[test]
    fn test_cancel_from_flagged_status() {
        let mut job = seed().remove(3);
        job.apply(QueueJobAction::Cancel, &ActionParams::default())
            .unwrap();
        assert_eq!(job.status, QueueJobStatus::Cancelled);
    }
}
