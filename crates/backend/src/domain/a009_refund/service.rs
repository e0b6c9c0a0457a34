use chrono::{DateTime, Utc};
use contracts::domain::a005_company::ApprovalStatus;
use contracts::domain::a009_refund::{
    AdjustmentType, NewAdjustment, OriginalTransaction, RefundAction, RefundAdjustment, RelatedTo,
};
use contracts::shared::actions::{ActionError, ActionParams};
use contracts::shared::state_machine::StatusMachine;

use crate::shared::actions::ApplyAction;
use crate::shared::error::ApiError;

/// Name recorded on decisions taken from the admin panel
pub const REVIEWER: &str = "Admin";

impl ApplyAction for RefundAdjustment {
    fn apply(&mut self, action: RefundAction, params: &ActionParams) -> Result<(), ActionError> {
        match action {
            RefundAction::Approve => {
                self.approval_status = self.approval_status.transition(ApprovalStatus::Approved)?;
                self.approved_by = Some(REVIEWER.to_string());
            }
            RefundAction::Reject => {
                self.approval_status = self.approval_status.transition(ApprovalStatus::Rejected)?;
                self.approved_by = Some(REVIEWER.to_string());
            }
            RefundAction::AddNotes => {
                let note = params.note().ok_or(ActionError::MissingParam("note"))?;
                self.add_note(note);
                return Ok(());
            }
        }
        if let Some(note) = params.note() {
            self.add_note(note);
        }
        Ok(())
    }
}

/// Validates the form and builds a pending adjustment stamped with `now`.
pub fn create(new: NewAdjustment, now: DateTime<Utc>) -> Result<RefundAdjustment, ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    let id = format!("ra-{}", uuid::Uuid::new_v4().simple());
    Ok(new.into_adjustment(id, now.format("%Y-%m-%d %H:%M").to_string()))
}

#[allow(clippy::too_many_arguments)]
fn adjustment(
    id: &str,
    adjustment_type: AdjustmentType,
    amount: f64,
    reason: &str,
    related_to: RelatedTo,
    original: (&str, f64, &str, &str),
    approval: ApprovalStatus,
    requested_at: &str,
    approved_by: Option<&str>,
    notes: &str,
) -> RefundAdjustment {
    RefundAdjustment {
        id: id.into(),
        adjustment_type,
        amount,
        reason: reason.into(),
        related_to,
        original_transaction: OriginalTransaction {
            reference_id: original.0.into(),
            original_amount: original.1,
            date: original.2.into(),
            description: Some(original.3.into()),
        },
        approval_status: approval,
        requested_at: requested_at.into(),
        approved_by: approved_by.map(Into::into),
        internal_notes: Some(notes.into()),
    }
}

pub fn seed() -> Vec<RefundAdjustment> {
    use AdjustmentType::*;
    use ApprovalStatus::*;
    vec![
        adjustment("ra1", RefundFull, 90.0, "Customer cancellation \u{2013} trip postponed", RelatedTo::Job, ("J-2810", 90.0, "2025-02-12", "Home Cleaning \u{2013} Anna Bell"), Approved, "2025-02-12 09:20", Some(REVIEWER), "Policy: full refund within 24h cancel."),
        adjustment("ra2", RefundPartial, 55.0, "Dispute resolution \u{2013} partial refund agreed", RelatedTo::Job, ("J-2828", 200.0, "2025-02-14", "Carpentry \u{2013} Lisa Anderson"), Approved, "2025-02-15 10:00", Some(REVIEWER), "Quality dispute; 55 refund to customer."),
        adjustment("ra3", Credit, 25.0, "Goodwill credit \u{2013} service delay", RelatedTo::Wallet, ("TXN-8842", 95.0, "2025-02-16", "Electrical \u{2013} David Brown"), Pending, "2025-02-16 14:00", None, "Professional late; credit to customer wallet."),
        adjustment("ra4", Deduction, 25.0, "Late cancellation penalty", RelatedTo::Payment, ("J-2805", 110.0, "2025-02-11", "HVAC \u{2013} Tom Harris"), Approved, "2025-02-11 14:15", Some(REVIEWER), "Pro cancelled; penalty applied per policy."),
        adjustment("ra5", RefundFull, 65.0, "Duplicate booking \u{2013} refund", RelatedTo::Job, ("J-2800", 65.0, "2025-02-10", "Cleaning \u{2013} Lisa Park"), Rejected, "2025-02-10 12:00", None, "Rejected: duplicate claim already refunded."),
    ]
}
