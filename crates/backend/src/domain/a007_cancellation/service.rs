use contracts::domain::a007_cancellation::{
    Cancellation, CancellationAction, CancellationReason, InitiatedBy, ProfessionalImpact,
};
use contracts::shared::actions::{ActionError, ActionParams};

use crate::shared::actions::ApplyAction;

impl ApplyAction for Cancellation {
    fn apply(&mut self, action: CancellationAction, params: &ActionParams) -> Result<(), ActionError> {
        match action {
            CancellationAction::OverridePenalty => {
                tracing::info!(
                    "Penalty of {} on {} overridden{}",
                    self.penalty_amount,
                    self.job_id,
                    params.note().map(|n| format!(": {}", n)).unwrap_or_default()
                );
                self.penalty_overridden = true;
                self.penalty_amount = 0.0;
            }
            CancellationAction::DisciplinaryAction => {
                let note = params.note().ok_or(ActionError::MissingParam("note"))?;
                self.disciplinary_note = Some(note.to_string());
            }
        }
        Ok(())
    }
}

fn impact(before: f64, after: f64, count: u32) -> ProfessionalImpact {
    ProfessionalImpact {
        completion_rate_before: before,
        completion_rate_after: after,
        cancellation_count: count,
    }
}

#[allow(clippy::too_many_arguments)]
fn cancellation(
    id: &str,
    job_id: &str,
    customer: &str,
    professional: Option<(&str, &str)>,
    initiated_by: InitiatedBy,
    reason: CancellationReason,
    detail: Option<&str>,
    cancelled_at: &str,
    penalty: (f64, bool),
    refund: f64,
    professional_impact: ProfessionalImpact,
) -> Cancellation {
    Cancellation {
        id: id.into(),
        job_id: job_id.into(),
        customer_name: customer.into(),
        professional_id: professional.map(|p| p.0.to_string()),
        professional_name: professional.map(|p| p.1.to_string()),
        initiated_by,
        reason,
        reason_detail: detail.map(Into::into),
        cancelled_at: cancelled_at.into(),
        penalty_amount: penalty.0,
        penalty_overridden: penalty.1,
        refund_amount: refund,
        professional_impact,
        disciplinary_note: None,
    }
}

pub fn seed() -> Vec<Cancellation> {
    use CancellationReason::*;
    vec![
        cancellation("1", "J-2810", "Anna Bell", None, InitiatedBy::Customer, CustomerChangeOfPlans, Some("Trip postponed."), "2025-02-12 09:15", (0.0, false), 90.0, impact(98.0, 98.0, 0)),
        cancellation("2", "J-2805", "Tom Harris", Some(("1", "Mike Johnson")), InitiatedBy::Professional, ProfessionalUnavailable, Some("Emergency; could not attend."), "2025-02-11 14:00", (25.0, false), 110.0, impact(99.0, 97.0, 2)),
        cancellation("3", "J-2800", "Lisa Park", Some(("3", "Sarah Chen")), InitiatedBy::Customer, ScheduleConflict, None, "2025-02-10 11:30", (0.0, false), 65.0, impact(100.0, 100.0, 0)),
        cancellation("4", "J-2795", "David Brown", Some(("2", "Alex Rivera")), InitiatedBy::Professional, NoShow, Some("Customer not at address."), "2025-02-09 16:45", (0.0, true), 0.0, impact(95.0, 95.0, 1)),
        cancellation("5", "J-2790", "Emma Wilson", Some(("4", "Chris Taylor")), InitiatedBy::Admin, PaymentIssue, Some("Fraud flag; cancelled by support."), "2025-02-08 10:00", (0.0, false), 0.0, impact(92.0, 92.0, 3)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_cancellation::summarize;
    use contracts::shared::actions::RowActions;

    #[test]
    fn test_seed_summary() {
        let items = seed();
        let summary = summarize(&items);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.total_penalties, 25.0);
        assert_eq!(summary.total_refunds, 265.0);
        assert_eq!(summary.professionals_affected, 4);
        assert_eq!(summary.by_reason.len(), 7);
        assert_eq!(summary.by_reason[0].count, 1);
        assert_eq!(summary.by_reason[5].count, 0);
    }

    #[test]
    fn test_override_penalty_clears_amount() {
        let mut c = seed().remove(1);
        assert!(c.is_available(CancellationAction::OverridePenalty));
        c.apply(CancellationAction::OverridePenalty, &ActionParams::default())
            .unwrap();
        assert!(c.penalty_overridden);
        assert_eq!(c.penalty_amount, 0.0);
        assert!(!c.is_available(CancellationAction::OverridePenalty));
    }

    #[test]
    fn test_disciplinary_action_once() {
        let mut c = seed().remove(4);
        let params = ActionParams {
            note: Some("Written warning".into()),
            ..Default::default()
        };
        c.apply(CancellationAction::DisciplinaryAction, &params)
            .unwrap();
        assert_eq!(c.disciplinary_note.as_deref(), Some("Written warning"));
        assert!(c.available_actions().is_empty());
        assert!(seed()[0].available_actions().is_empty());
    }
}
