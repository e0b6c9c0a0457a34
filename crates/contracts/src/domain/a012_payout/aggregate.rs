use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::actions::RowActions;
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::state_machine::StatusMachine;
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

status_enum! {
    pub enum PayoutStatus {
        Pending => ("pending", "Pending", Warning),
        Scheduled => ("scheduled", "Scheduled", Info),
        Held => ("held", "Held", Secondary),
        Processing => ("processing", "Processing", Primary),
        Processed => ("processed", "Processed", Success),
        Failed => ("failed", "Failed", Danger),
    }
}

impl StatusMachine for PayoutStatus {
    fn can_transition(from: Self, to: Self) -> bool {
        use PayoutStatus::*;
        matches!(
            (from, to),
            (Pending, Scheduled | Held | Processing)
                | (Scheduled, Held | Processing)
                | (Held, Scheduled | Processing)
                | (Processing, Processed | Failed)
                | (Failed, Pending)
        )
    }
}

status_enum! {
    pub enum PaymentMethod {
        BankTransfer => ("bank_transfer", "Bank transfer", Light),
        Paypal => ("paypal", "PayPal", Light),
        Wallet => ("wallet", "Wallet", Light),
    }
}

action_enum! {
    pub enum PayoutAction {
        Approve => ("approve", "Approve payout", Normal, []),
        Schedule => ("schedule", "Schedule payout", Normal, [required(Value, "Payout date (YYYY-MM-DD)")]),
        Hold => ("hold", "Hold payout", Danger, [optional(Note, "Reason")]),
        Adjust => ("adjust", "Adjust payout", Normal, [required(Amount, "New net amount")]),
        MarkProcessed => ("mark_processed", "Mark processed", Normal, []),
        MarkFailed => ("mark_failed", "Mark failed", Danger, []),
        Retry => ("retry", "Retry payout", Normal, []),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: String,
    pub professional_id: String,
    pub professional_name: String,
    pub professional_email: String,
    pub gross_amount: f64,
    pub commission_deduction: f64,
    pub net_amount: f64,
    pub payment_method: PaymentMethod,
    /// Last digits, e-mail or wallet label
    pub payment_method_detail: String,
    pub status: PayoutStatus,
    pub jobs_count: u32,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_reason: Option<String>,
}

impl Payout {
    /// Sets a new net amount; the commission becomes gross minus net
    pub fn adjust_net(&mut self, net: f64) -> Result<(), String> {
        if !(0.0..=self.gross_amount).contains(&net) {
            return Err(format!(
                "Net amount must be between 0 and {:.2}",
                self.gross_amount
            ));
        }
        self.net_amount = net;
        self.commission_deduction = ((self.gross_amount - net) * 100.0).round() / 100.0;
        Ok(())
    }
}

impl RowActions for Payout {
    type Action = PayoutAction;

    fn available_actions(&self) -> Vec<PayoutAction> {
        use PayoutStatus::*;
        let can = |to| PayoutStatus::can_transition(self.status, to);

        let mut actions = Vec::new();
        if can(Processing) {
            actions.push(PayoutAction::Approve);
        }
        if can(Scheduled) {
            actions.push(PayoutAction::Schedule);
        }
        if can(Held) {
            actions.push(PayoutAction::Hold);
        }
        if matches!(self.status, Pending | Scheduled | Held) {
            actions.push(PayoutAction::Adjust);
        }
        if self.status == Processing {
            actions.extend([PayoutAction::MarkProcessed, PayoutAction::MarkFailed]);
        }
        if self.status == Failed {
            actions.push(PayoutAction::Retry);
        }
        actions
    }
}

impl AdminAggregate for Payout {
    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "payouts"
    }

    fn element_name() -> &'static str {
        "Payout"
    }

    fn list_name() -> &'static str {
        "Payouts to Professionals"
    }

    fn detail_param() -> &'static str {
        "payout"
    }

    fn detail_value(&self) -> &str {
        &self.id
    }
}

impl ListRecord for Payout {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.professional_name.as_str(), self.professional_email.as_str()]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "status" => self.status.code() == value,
            "payment_method" => self.payment_method.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        self.processed_at
            .as_deref()
            .or(self.scheduled_date.as_deref())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "net_amount" => Some(cmp_f64(self.net_amount, other.net_amount)),
            "gross_amount" => Some(cmp_f64(self.gross_amount, other.gross_amount)),
            "professional_name" => Some(self.professional_name.cmp(&other.professional_name)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("status", "All statuses", PayoutStatus::options()),
            FilterSpec::select("payment_method", "All methods", PaymentMethod::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search professional name or email..."
    }
}

/// Body of `GET /api/payouts/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutSummary {
    /// Net of pending and scheduled payouts
    pub pending_total: f64,
    pub processed_count: usize,
}

impl PayoutSummary {
    pub fn compute<'a>(payouts: impl IntoIterator<Item = &'a Payout>) -> Self {
        payouts
            .into_iter()
            .fold(PayoutSummary::default(), |mut acc, p| {
                match p.status {
                    PayoutStatus::Pending | PayoutStatus::Scheduled => acc.pending_total += p.net_amount,
                    PayoutStatus::Processed => acc.processed_count += 1,
                    _ => {}
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::tests::codes;
    use crate::shared::state_machine::tests::assert_edges;
    use crate::shared::status::tests::assert_total;

    fn payout(id: &str, status: PayoutStatus, net: f64) -> Payout {
        Payout {
            id: id.into(),
            professional_id: "1".into(),
            professional_name: "Mike Johnson".into(),
            professional_email: "mike.j@example.com".into(),
            gross_amount: 340.0,
            commission_deduction: 340.0 - net,
            net_amount: net,
            payment_method: PaymentMethod::BankTransfer,
            payment_method_detail: "****4521".into(),
            status,
            jobs_count: 4,
            scheduled_date: None,
            processed_at: None,
            hold_reason: None,
        }
    }

    #[test]
    fn test_lookups_and_machine() {
        assert_total::<PayoutStatus>();
        assert_total::<PaymentMethod>();
        use PayoutStatus::*;
        assert_edges(&[
            (Pending, Scheduled),
            (Pending, Held),
            (Pending, Processing),
            (Scheduled, Held),
            (Scheduled, Processing),
            (Held, Scheduled),
            (Held, Processing),
            (Processing, Processed),
            (Processing, Failed),
            (Failed, Pending),
        ]);
        assert!(Processed.is_terminal());
    }

    #[test]
    fn test_gating() {
        assert_eq!(
            codes(&payout("po1", PayoutStatus::Pending, 289.0).available_actions()),
            vec!["approve", "schedule", "hold", "adjust"]
        );
        assert_eq!(
            codes(&payout("po2", PayoutStatus::Scheduled, 289.0).available_actions()),
            vec!["approve", "hold", "adjust"]
        );
        assert_eq!(
            codes(&payout("po3", PayoutStatus::Held, 148.0).available_actions()),
            vec!["approve", "schedule", "adjust"]
        );
        assert!(payout("po5", PayoutStatus::Processed, 344.4).available_actions().is_empty());
    }

    #[test]
    fn test_adjust_recomputes_commission() {
        let mut p = payout("po1", PayoutStatus::Pending, 289.0);
        p.adjust_net(300.0).unwrap();
        assert_eq!(p.commission_deduction, 40.0);
        assert!(p.adjust_net(341.0).is_err());
        assert!(p.adjust_net(-1.0).is_err());
        assert_eq!(p.net_amount, 300.0);
    }

    #[test]
    fn test_summary() {
        let rows = vec![
            payout("po1", PayoutStatus::Pending, 289.0),
            payout("po2", PayoutStatus::Scheduled, 387.6),
            payout("po3", PayoutStatus::Held, 148.0),
            payout("po5", PayoutStatus::Processed, 344.4),
        ];
        let summary = PayoutSummary::compute(&rows);
        assert!((summary.pending_total - 676.6).abs() < 1e-9);
        assert_eq!(summary.processed_count, 1);
    }
}
