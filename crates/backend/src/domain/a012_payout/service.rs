use chrono::NaiveDate;
use contracts::domain::a012_payout::{PaymentMethod, Payout, PayoutAction, PayoutStatus};
use contracts::shared::actions::{ActionError, ActionParams};
use contracts::shared::state_machine::StatusMachine;

use crate::shared::actions::ApplyAction;

impl ApplyAction for Payout {
    fn apply(&mut self, action: PayoutAction, params: &ActionParams) -> Result<(), ActionError> {
        match action {
            PayoutAction::Approve => {
                self.status = self.status.transition(PayoutStatus::Processing)?;
                self.hold_reason = None;
            }
            PayoutAction::Schedule => {
                let raw = params.value()?.trim();
                let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                    ActionError::InvalidParam(format!("'{}' is not a YYYY-MM-DD date", raw))
                })?;
                self.status = self.status.transition(PayoutStatus::Scheduled)?;
                self.scheduled_date = Some(date.format("%Y-%m-%d").to_string());
                self.hold_reason = None;
            }
            PayoutAction::Hold => {
                self.status = self.status.transition(PayoutStatus::Held)?;
                self.hold_reason = params.note().map(str::to_string);
            }
            PayoutAction::Adjust => {
                let net = params.amount()?;
                self.adjust_net(net).map_err(ActionError::InvalidParam)?;
            }
            PayoutAction::MarkProcessed => {
                self.status = self.status.transition(PayoutStatus::Processed)?;
                self.processed_at = Some(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string());
            }
            PayoutAction::MarkFailed => {
                self.status = self.status.transition(PayoutStatus::Failed)?;
                self.processed_at = Some(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string());
            }
            PayoutAction::Retry => {
                self.status = self.status.transition(PayoutStatus::Pending)?;
                self.processed_at = None;
            }
        }
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn payout(
    id: &str,
    professional: (&str, &str, &str),
    gross: f64,
    commission: f64,
    method: PaymentMethod,
    method_detail: &str,
    status: PayoutStatus,
    jobs_count: u32,
) -> Payout {
    Payout {
        id: id.into(),
        professional_id: professional.0.into(),
        professional_name: professional.1.into(),
        professional_email: professional.2.into(),
        gross_amount: gross,
        commission_deduction: commission,
        net_amount: ((gross - commission) * 100.0).round() / 100.0,
        payment_method: method,
        payment_method_detail: method_detail.into(),
        status,
        jobs_count,
        scheduled_date: None,
        processed_at: None,
        hold_reason: None,
    }
}

pub fn seed() -> Vec<Payout> {
    use PaymentMethod::*;
    use PayoutStatus::*;
    let mut scheduled = payout("po2", ("2", "Alex Rivera", "alex.r@example.com"), 456.0, 68.4, Paypal, "alex.r@example.com", Scheduled, 5);
    scheduled.scheduled_date = Some("2025-02-18".into());
    let mut processed = payout("po5", ("5", "David Kim", "david.k@example.com"), 420.0, 75.6, BankTransfer, "****9012", Processed, 6);
    processed.processed_at = Some("2025-02-15 09:00".into());
    let mut failed = payout("po6", ("6", "Emma Wilson", "emma.w@example.com"), 95.0, 19.0, Paypal, "emma.w@example.com", Failed, 1);
    failed.processed_at = Some("2025-02-14 14:00".into());

    vec![
        payout("po1", ("1", "Mike Johnson", "mike.j@example.com"), 340.0, 51.0, BankTransfer, "****4521", Pending, 4),
        scheduled,
        payout("po3", ("3", "Sarah Chen", "sarah.c@example.com"), 185.0, 37.0, BankTransfer, "****7832", Held, 2),
        payout("po4", ("4", "Chris Taylor", "chris.t@example.com"), 320.0, 48.0, Wallet, "Platform wallet", Processing, 3),
        processed,
        failed,
    ]
}
