use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::shared::actions::RowActions;
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

status_enum! {
    pub enum InitiatedBy {
        Customer => ("customer", "Customer", Info),
        Professional => ("professional", "Professional", Warning),
        Admin => ("admin", "Admin", Primary),
        System => ("system", "System", Secondary),
    }
}

status_enum! {
    pub enum CancellationReason {
        CustomerChangeOfPlans => ("customer_change_of_plans", "Customer change of plans", Light),
        ProfessionalUnavailable => ("professional_unavailable", "Professional unavailable", Light),
        ScheduleConflict => ("schedule_conflict", "Schedule conflict", Light),
        PaymentIssue => ("payment_issue", "Payment issue", Light),
        NoShow => ("no_show", "No show", Light),
        DuplicateBooking => ("duplicate_booking", "Duplicate booking", Light),
        Other => ("other", "Other", Light),
    }
}

action_enum! {
    pub enum CancellationAction {
        OverridePenalty => ("override_penalty", "Override penalty", Normal, [optional(Note, "Override note")]),
        DisciplinaryAction => ("disciplinary_action", "Disciplinary action", Danger, [required(Note, "Action taken")]),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalImpact {
    pub completion_rate_before: f64,
    pub completion_rate_after: f64,
    pub cancellation_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cancellation {
    pub id: String,
    pub job_id: String,
    pub customer_name: String,
    pub professional_id: Option<String>,
    pub professional_name: Option<String>,
    pub initiated_by: InitiatedBy,
    pub reason: CancellationReason,
    #[serde(default)]
    pub reason_detail: Option<String>,
    pub cancelled_at: String,
    pub penalty_amount: f64,
    pub penalty_overridden: bool,
    pub refund_amount: f64,
    pub professional_impact: ProfessionalImpact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disciplinary_note: Option<String>,
}

impl RowActions for Cancellation {
    type Action = CancellationAction;

    fn available_actions(&self) -> Vec<CancellationAction> {
        let mut actions = Vec::new();
        if self.penalty_amount > 0.0 && !self.penalty_overridden {
            actions.push(CancellationAction::OverridePenalty);
        }
        if self.professional_id.is_some() && self.disciplinary_note.is_none() {
            actions.push(CancellationAction::DisciplinaryAction);
        }
        actions
    }
}

impl AdminAggregate for Cancellation {
    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "cancellations"
    }

    fn element_name() -> &'static str {
        "Cancellation"
    }

    fn list_name() -> &'static str {
        "Cancellations Management"
    }

    fn detail_param() -> &'static str {
        "job"
    }

    fn detail_value(&self) -> &str {
        &self.job_id
    }
}

impl ListRecord for Cancellation {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.job_id.as_str(), self.customer_name.as_str()];
        if let Some(name) = &self.professional_name {
            fields.push(name.as_str());
        }
        fields
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "initiated_by" => self.initiated_by.code() == value,
            "reason" => self.reason.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.cancelled_at.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "cancelled_at" => Some(self.cancelled_at.cmp(&other.cancelled_at)),
            "penalty_amount" => Some(cmp_f64(self.penalty_amount, other.penalty_amount)),
            "refund_amount" => Some(cmp_f64(self.refund_amount, other.refund_amount)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("initiated_by", "All initiators", InitiatedBy::options()),
            FilterSpec::select("reason", "All reasons", CancellationReason::options()),
            FilterSpec::date_range("Cancelled"),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search Job ID, customer..."
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonCount {
    pub code: String,
    pub label: String,
    pub count: usize,
}

/// Body of `GET /api/cancellations/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationSummary {
    pub total: usize,
    pub total_penalties: f64,
    pub total_refunds: f64,
    pub professionals_affected: usize,
    pub by_reason: Vec<ReasonCount>,
}

/// Penalties count only while not overridden; reasons keep declaration order.
pub fn summarize<'a>(items: impl IntoIterator<Item = &'a Cancellation>) -> CancellationSummary {
    let items: Vec<&Cancellation> = items.into_iter().collect();
    let professionals: HashSet<&str> = items
        .iter()
        .filter_map(|c| c.professional_id.as_deref())
        .collect();

    CancellationSummary {
        total: items.len(),
        total_penalties: items
            .iter()
            .filter(|c| !c.penalty_overridden)
            .map(|c| c.penalty_amount)
            .sum(),
        total_refunds: items.iter().map(|c| c.refund_amount).sum(),
        professionals_affected: professionals.len(),
        by_reason: CancellationReason::ALL
            .iter()
            .map(|reason| ReasonCount {
                code: reason.code().to_string(),
                label: reason.display_name().to_string(),
                count: items.iter().filter(|c| c.reason == *reason).count(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::tests::codes;
    use crate::shared::status::tests::assert_total;

    fn cancellation(id: &str, pro: Option<&str>, penalty: f64, reason: CancellationReason) -> Cancellation {
        Cancellation {
            id: id.into(),
            job_id: format!("J-28{}", id),
            customer_name: "Tom Harris".into(),
            professional_id: pro.map(Into::into),
            professional_name: pro.map(|_| "Mike Johnson".to_string()),
            initiated_by: InitiatedBy::Professional,
            reason,
            reason_detail: None,
            cancelled_at: "2025-02-11 14:00".into(),
            penalty_amount: penalty,
            penalty_overridden: false,
            refund_amount: 110.0,
            professional_impact: ProfessionalImpact {
                completion_rate_before: 99.0,
                completion_rate_after: 97.0,
                cancellation_count: 2,
            },
            disciplinary_note: None,
        }
    }

    #[test]
    fn test_lookups_are_total() {
        assert_total::<InitiatedBy>();
        assert_total::<CancellationReason>();
    }

    #[test]
    fn test_gating() {
        let c = cancellation("1", Some("1"), 25.0, CancellationReason::NoShow);
        assert_eq!(codes(&c.available_actions()), vec!["override_penalty", "disciplinary_action"]);

        let mut c = cancellation("2", None, 0.0, CancellationReason::Other);
        assert!(c.available_actions().is_empty());
        c.professional_id = Some("4".into());
        c.disciplinary_note = Some("Warning issued".into());
        assert!(c.available_actions().is_empty());
    }

    #[test]
    fn test_summary() {
        let mut overridden = cancellation("3", Some("2"), 40.0, CancellationReason::NoShow);
        overridden.penalty_overridden = true;
        let items = vec![
            cancellation("1", Some("1"), 25.0, CancellationReason::NoShow),
            cancellation("2", None, 0.0, CancellationReason::Other),
            overridden,
            cancellation("4", Some("1"), 10.0, CancellationReason::ScheduleConflict),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.total_penalties, 35.0);
        assert_eq!(summary.total_refunds, 440.0);
        assert_eq!(summary.professionals_affected, 2);
        assert_eq!(summary.by_reason.len(), CancellationReason::ALL.len());
        let no_show = summary.by_reason.iter().find(|r| r.code == "no_show").unwrap();
        assert_eq!(no_show.count, 2);
        assert_eq!(no_show.label, "No show");
    }
}
