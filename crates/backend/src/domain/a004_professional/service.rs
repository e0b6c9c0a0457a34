use contracts::domain::a004_professional::{
    AccountStatus, Professional, ProfessionalAction, VerificationStatus, SUBSCRIPTION_PLANS,
};
use contracts::shared::actions::{ActionError, ActionKind, ActionParams};
use contracts::shared::state_machine::StatusMachine;

use crate::shared::actions::ApplyAction;

/// Canonical plan name, matched case-insensitively
pub fn parse_plan(value: &str) -> Result<&'static str, ActionError> {
    SUBSCRIPTION_PLANS
        .iter()
        .copied()
        .find(|p| p.eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| {
            ActionError::InvalidParam(format!(
                "unknown plan '{}', expected one of {}",
                value,
                SUBSCRIPTION_PLANS.join(", ")
            ))
        })
}

/// Commission percentage in 0..=100
pub fn parse_commission(amount: f64) -> Result<f64, ActionError> {
    if (0.0..=100.0).contains(&amount) {
        Ok(amount)
    } else {
        Err(ActionError::InvalidParam(
            "commission rate must be between 0 and 100".into(),
        ))
    }
}

impl ApplyAction for Professional {
    fn apply(&mut self, action: ProfessionalAction, params: &ActionParams) -> Result<(), ActionError> {
        match action {
            ProfessionalAction::Approve => {
                self.account_status = self.account_status.transition(AccountStatus::Active)?;
            }
            ProfessionalAction::Reject => {
                self.account_status = self.account_status.transition(AccountStatus::Rejected)?;
                self.review_note = params.note().map(str::to_string);
            }
            ProfessionalAction::Suspend => {
                self.account_status = self.account_status.transition(AccountStatus::Suspended)?;
                self.review_note = params.note().map(str::to_string);
            }
            ProfessionalAction::Reactivate => {
                self.account_status = self.account_status.transition(AccountStatus::Active)?;
                self.review_note = None;
            }
            ProfessionalAction::AdjustCommission => {
                self.commission_rate = parse_commission(params.amount()?)?;
            }
            ProfessionalAction::UpdatePlan => {
                self.subscription_plan = parse_plan(params.value()?)?.to_string();
            }
            ProfessionalAction::ViewDocuments => {
                return Err(ActionError::NotAvailable(action.code()));
            }
        }
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn professional(
    id: &str,
    name: &str,
    email: &str,
    categories: &[&str],
    areas: &[&str],
    rating: f64,
    total_jobs: u32,
    completion_rate: f64,
    verification: VerificationStatus,
    documents: u32,
    plan: &str,
    commission: f64,
    payout_method: &str,
    account: AccountStatus,
) -> Professional {
    Professional {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        service_categories: categories.iter().map(|c| c.to_string()).collect(),
        service_areas: areas.iter().map(|a| a.to_string()).collect(),
        rating,
        total_jobs,
        completion_rate,
        verification_status: verification,
        documents_count: documents,
        subscription_plan: plan.into(),
        commission_rate: commission,
        payout_method: payout_method.into(),
        account_status: account,
        review_note: None,
    }
}

pub fn seed() -> Vec<Professional> {
    use AccountStatus::{Active, PendingApproval, Suspended};
    use VerificationStatus::{Pending, Rejected, Verified};
    vec![
        professional("1", "Mike Johnson", "mike.j@example.com", &["AC Repair", "HVAC"], &["Downtown", "North District"], 4.8, 124, 98.0, Verified, 4, "Pro", 15.0, "Bank transfer", Active),
        professional("2", "Alex Rivera", "alex.r@example.com", &["Electrical", "Smart Home"], &["Central", "East Side"], 4.6, 89, 95.0, Verified, 4, "Standard", 18.0, "PayPal", Active),
        professional("3", "Sarah Chen", "sarah.c@example.com", &["Home Cleaning", "Deep Clean"], &["All areas"], 4.9, 56, 100.0, Pending, 3, "Trial", 20.0, "Bank transfer", PendingApproval),
        professional("4", "Chris Taylor", "chris.t@example.com", &["Plumbing", "Pest Control"], &["West", "South"], 4.4, 201, 92.0, Verified, 5, "Pro", 15.0, "Bank transfer", Suspended),
        professional("5", "Emma Wilson", "emma.w@example.com", &["Plumbing"], &["North District"], 4.7, 78, 97.0, Rejected, 2, "\u{2014}", 20.0, "\u{2014}", PendingApproval),
        professional("6", "David Kim", "david.k@example.com", &["Carpentry", "Furniture"], &["Central", "Downtown"], 4.5, 34, 94.0, Verified, 4, "Standard", 18.0, "PayPal", Active),
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
    fn test_reject_records_note_and_is_terminal() {
        let mut pro = seed().remove(4);
        let params = ActionParams {
            note: Some("Licence expired".into()),
            ..Default::default()
        };
        pro.apply(ProfessionalAction::Reject, &params).unwrap();
        assert_eq!(pro.account_status, AccountStatus::Rejected);
        assert_eq!(pro.review_note.as_deref(), Some("Licence expired"));
        assert!(!pro.is_available(ProfessionalAction::UpdatePlan));
    }

    #[test]
    fn test_suspend_and_reactivate() {
        let mut pro = seed().remove(0);
        pro.apply(ProfessionalAction::Suspend, &ActionParams::default())
            .unwrap();
        assert_eq!(pro.account_status, AccountStatus::Suspended);
        pro.apply(ProfessionalAction::Reactivate, &ActionParams::default())
            .unwrap();
        assert_eq!(pro.account_status, AccountStatus::Active);
    }

    #[test]
    fn test_commission_bounds() {
        let mut pro = seed().remove(1);
        pro.apply(ProfessionalAction::AdjustCommission, &amount(12.5))
            .unwrap();
        assert_eq!(pro.commission_rate, 12.5);
        assert!(pro
            .apply(ProfessionalAction::AdjustCommission, &amount(120.0))
            .is_err());
        assert!(pro
            .apply(ProfessionalAction::AdjustCommission, &amount(-1.0))
            .is_err());
        assert_eq!(pro.commission_rate, 12.5);
    }

    #[test]
    fn test_plan_names() {
        assert_eq!(parse_plan("enterprise").unwrap(), "Enterprise");
        assert!(parse_plan("Gold").is_err());
    }
}
