use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::actions::RowActions;
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::state_machine::StatusMachine;
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

status_enum! {
    pub enum RaisedBy {
        Customer => ("customer", "Customer", Info),
        Professional => ("professional", "Professional", Warning),
    }
}

status_enum! {
    pub enum DisputeStatus {
        Open => ("open", "Open", Danger),
        UnderReview => ("under_review", "Under review", Warning),
        AwaitingInfo => ("awaiting_info", "Awaiting info", Info),
        Resolved => ("resolved", "Resolved", Success),
        Closed => ("closed", "Closed", Secondary),
    }
}

impl DisputeStatus {
    /// Still needs an operator
    pub fn is_open(self) -> bool {
        matches!(
            self,
            DisputeStatus::Open | DisputeStatus::UnderReview | DisputeStatus::AwaitingInfo
        )
    }
}

impl StatusMachine for DisputeStatus {
    fn can_transition(from: Self, to: Self) -> bool {
        use DisputeStatus::*;
        matches!(
            (from, to),
            (Open, UnderReview | AwaitingInfo | Resolved | Closed)
                | (UnderReview, AwaitingInfo | Resolved | Closed)
                | (AwaitingInfo, UnderReview | Resolved | Closed)
                | (Resolved, Closed)
        )
    }
}

status_enum! {
    pub enum DisputeReason {
        QualityIssue => ("quality_issue", "Quality issue", Light),
        PaymentDisagreement => ("payment_disagreement", "Payment disagreement", Light),
        NoShow => ("no_show", "No show", Light),
        DamageClaim => ("damage_claim", "Damage claim", Light),
        ScopeDispute => ("scope_dispute", "Scope dispute", Light),
        Other => ("other", "Other", Light),
    }
}

status_enum! {
    pub enum DisputeJobStatus {
        Completed => ("completed", "Completed", Success),
        Ongoing => ("ongoing", "Ongoing", Primary),
    }
}

action_enum! {
    pub enum DisputeAction {
        ViewChat => ("view_chat", "Review job details, evidence & chat", Navigate { param: "dispute", chat: true }, []),
        StartReview => ("start_review", "Start review", Normal, []),
        RequestInfo => ("request_info", "Request additional information", Normal, [optional(Note, "What is needed")]),
        PartialRefund => ("partial_refund", "Issue partial refund", Normal, [required(Amount, "Refund amount")]),
        FullRefund => ("full_refund", "Issue full refund", Normal, []),
        ApplyPenalty => ("apply_penalty", "Apply penalty", Danger, [required(Note, "Penalty details")]),
        Close => ("close", "Close dispute", Normal, []),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub id: String,
    pub job_id: String,
    pub job_status: DisputeJobStatus,
    pub customer_name: String,
    pub professional_name: String,
    pub raised_by: RaisedBy,
    pub reason: DisputeReason,
    pub reason_summary: String,
    pub status: DisputeStatus,
    pub opened_at: String,
    pub job_amount: f64,
    pub evidence_count: u32,
    pub has_chat_history: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_note: Option<String>,
}

impl RowActions for Dispute {
    type Action = DisputeAction;

    fn available_actions(&self) -> Vec<DisputeAction> {
        use DisputeAction::*;
        let can = |to| DisputeStatus::can_transition(self.status, to);

        let mut actions = Vec::new();
        if self.has_chat_history {
            actions.push(ViewChat);
        }
        if can(DisputeStatus::UnderReview) {
            actions.push(StartReview);
        }
        if can(DisputeStatus::AwaitingInfo) {
            actions.push(RequestInfo);
        }
        if can(DisputeStatus::Resolved) {
            actions.extend([PartialRefund, FullRefund]);
        }
        if self.status != DisputeStatus::Closed && self.penalty_note.is_none() {
            actions.push(ApplyPenalty);
        }
        if can(DisputeStatus::Closed) {
            actions.push(Close);
        }
        actions
    }
}

impl AdminAggregate for Dispute {
    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "disputes"
    }

    fn element_name() -> &'static str {
        "Dispute"
    }

    fn list_name() -> &'static str {
        "Disputes"
    }

    fn detail_param() -> &'static str {
        "dispute"
    }

    fn detail_value(&self) -> &str {
        &self.id
    }
}

impl ListRecord for Dispute {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.job_id.as_str(),
            self.customer_name.as_str(),
            self.professional_name.as_str(),
        ]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "status" => self.status.code() == value,
            "raised_by" => self.raised_by.code() == value,
            "reason" => self.reason.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.opened_at.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "opened_at" => Some(self.opened_at.cmp(&other.opened_at)),
            "job_amount" => Some(cmp_f64(self.job_amount, other.job_amount)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("status", "All statuses", DisputeStatus::options()),
            FilterSpec::select("raised_by", "Raised by", RaisedBy::options()),
            FilterSpec::select("reason", "All reasons", DisputeReason::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search Job ID, customer..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::tests::codes;
    use crate::shared::state_machine::tests::assert_edges;
    use crate::shared::status::tests::assert_total;

    fn dispute(status: DisputeStatus, chat: bool) -> Dispute {
        Dispute {
            id: "d1".into(),
            job_id: "J-2828".into(),
            job_status: DisputeJobStatus::Completed,
            customer_name: "Lisa Anderson".into(),
            professional_name: "David Kim".into(),
            raised_by: RaisedBy::Customer,
            reason: DisputeReason::QualityIssue,
            reason_summary: "Corners left unfinished.".into(),
            status,
            opened_at: "2025-02-14 11:00".into(),
            job_amount: 200.0,
            evidence_count: 3,
            has_chat_history: chat,
            refunded_amount: None,
            penalty_note: None,
        }
    }

    #[test]
    fn test_lookups_and_machine() {
        assert_total::<RaisedBy>();
        assert_total::<DisputeStatus>();
        assert_total::<DisputeReason>();
        assert_total::<DisputeJobStatus>();

        use DisputeStatus::*;
        assert_edges(&[
            (Open, UnderReview),
            (Open, AwaitingInfo),
            (Open, Resolved),
            (Open, Closed),
            (UnderReview, AwaitingInfo),
            (UnderReview, Resolved),
            (UnderReview, Closed),
            (AwaitingInfo, UnderReview),
            (AwaitingInfo, Resolved),
            (AwaitingInfo, Closed),
            (Resolved, Closed),
        ]);
        assert!(Closed.is_terminal());
    }

    #[test]
    fn test_gating_by_status() {
        let d = dispute(DisputeStatus::UnderReview, true);
        assert_eq!(
            codes(&d.available_actions()),
            vec!["view_chat", "request_info", "partial_refund", "full_refund", "apply_penalty", "close"]
        );

        let d = dispute(DisputeStatus::Resolved, false);
        assert_eq!(codes(&d.available_actions()), vec!["apply_penalty", "close"]);

        let mut d = dispute(DisputeStatus::Closed, true);
        assert_eq!(codes(&d.available_actions()), vec!["view_chat"]);
        d.status = DisputeStatus::Open;
        d.penalty_note = Some("Fee".into());
        assert!(!d.available_actions().contains(&DisputeAction::ApplyPenalty));
    }

    #[test]
    fn test_chat_link() {
        let d = dispute(DisputeStatus::Open, true);
        assert_eq!(d.detail_ref().with_chat(true).to_query(), "dispute=d1&chat=1");
    }
}
