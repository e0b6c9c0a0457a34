use contracts::domain::a008_dispute::{
    Dispute, DisputeAction, DisputeJobStatus, DisputeReason, DisputeStatus, RaisedBy,
};
use contracts::shared::actions::{ActionError, ActionKind, ActionParams};
use contracts::shared::format::format_currency;
use contracts::shared::state_machine::StatusMachine;

use crate::shared::actions::ApplyAction;

impl ApplyAction for Dispute {
    fn apply(&mut self, action: DisputeAction, params: &ActionParams) -> Result<(), ActionError> {
        match action {
            DisputeAction::StartReview => {
                self.status = self.status.transition(DisputeStatus::UnderReview)?;
            }
            DisputeAction::RequestInfo => {
                self.status = self.status.transition(DisputeStatus::AwaitingInfo)?;
                if let Some(note) = params.note() {
                    tracing::info!("Dispute {}: information requested: {}", self.id, note);
                }
            }
            DisputeAction::PartialRefund => {
                let amount = params.amount()?;
                if amount <= 0.0 || amount >= self.job_amount {
                    return Err(ActionError::InvalidParam(format!(
                        "partial refund must be between $0.00 and {}",
                        format_currency(self.job_amount)
                    )));
                }
                self.status = self.status.transition(DisputeStatus::Resolved)?;
                self.refunded_amount = Some(amount);
            }
            DisputeAction::FullRefund => {
                self.status = self.status.transition(DisputeStatus::Resolved)?;
                self.refunded_amount = Some(self.job_amount);
            }
            DisputeAction::ApplyPenalty => {
                let note = params.note().ok_or(ActionError::MissingParam("note"))?;
                self.penalty_note = Some(note.to_string());
            }
            DisputeAction::Close => {
                self.status = self.status.transition(DisputeStatus::Closed)?;
            }
            DisputeAction::ViewChat => {
                return Err(ActionError::NotAvailable(action.code()));
            }
        }
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn dispute(
    id: &str,
    job_id: &str,
    job_status: DisputeJobStatus,
    customer: &str,
    professional: &str,
    raised_by: RaisedBy,
    reason: DisputeReason,
    summary: &str,
    status: DisputeStatus,
    opened_at: &str,
    job_amount: f64,
    evidence_count: u32,
    has_chat_history: bool,
) -> Dispute {
    Dispute {
        id: id.into(),
        job_id: job_id.into(),
        job_status,
        customer_name: customer.into(),
        professional_name: professional.into(),
        raised_by,
        reason,
        reason_summary: summary.into(),
        status,
        opened_at: opened_at.into(),
        job_amount,
        evidence_count,
        has_chat_history,
        refunded_amount: None,
        penalty_note: None,
    }
}

pub fn seed() -> Vec<Dispute> {
    use DisputeJobStatus::{Completed, Ongoing};
    use DisputeReason::*;
    use DisputeStatus::*;
    vec![
        dispute("d1", "J-2828", Completed, "Lisa Anderson", "David Kim", RaisedBy::Customer, QualityIssue, "Work not completed to standard; corners left unfinished.", UnderReview, "2025-02-14 11:00", 200.0, 3, true),
        dispute("d2", "J-2825", Completed, "Robert Lee", "Chris Taylor", RaisedBy::Professional, PaymentDisagreement, "Customer disputes final invoice; claims extra charges not agreed.", Open, "2025-02-15 09:30", 75.0, 2, true),
        dispute("d3", "J-2832", Ongoing, "David Brown", "Alex Rivera", RaisedBy::Customer, NoShow, "Professional did not arrive at scheduled time.", AwaitingInfo, "2025-02-15 14:00", 95.0, 1, true),
        dispute("d4", "J-2815", Completed, "Tom Harris", "Mike Johnson", RaisedBy::Customer, DamageClaim, "Claim of damage to property during service.", Resolved, "2025-02-10 16:00", 110.0, 5, true),
        dispute("d5", "J-2808", Completed, "Anna Bell", "Sarah Chen", RaisedBy::Professional, ScopeDispute, "Customer requested additional work not in original scope.", Closed, "2025-02-08 10:00", 65.0, 2, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::actions::RowActions;

    fn amount(a: f64) -> ActionParams {
        ActionParams {
            amount: Some(a),
            ..Default::default()
        }
    }

    #[test]
    fn test_partial_refund_bounds() {
        let mut d = seed().remove(0);
        assert!(d.apply(DisputeAction::PartialRefund, &amount(200.0)).is_err());
        assert!(d.apply(DisputeAction::PartialRefund, &amount(0.0)).is_err());
        d.apply(DisputeAction::PartialRefund, &amount(55.0)).unwrap();
        assert_eq!(d.status, DisputeStatus::Resolved);
        assert_eq!(d.refunded_amount, Some(55.0));
        assert!(!d.is_available(DisputeAction::FullRefund));
    }

    #[test]
    fn test_open_dispute_lifecycle() {
        let mut d = seed().remove(1);
        d.apply(DisputeAction::StartReview, &ActionParams::default())
            .unwrap();
        d.apply(DisputeAction::RequestInfo, &ActionParams::default())
            .unwrap();
        assert_eq!(d.status, DisputeStatus::AwaitingInfo);
        d.apply(DisputeAction::FullRefund, &ActionParams::default())
            .unwrap();
        assert_eq!(d.refunded_amount, Some(75.0));
        d.apply(DisputeAction::Close, &ActionParams::default())
            .unwrap();
        assert!(d.status.is_terminal());
    }

    #[test]
    fn test_closed_dispute_without_chat_offers_nothing() {
        assert!(seed()[4].available_actions().is_empty());
    }
}
