use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::a005_company::ApprovalStatus;
use crate::shared::actions::RowActions;
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

status_enum! {
    pub enum AdjustmentType {
        RefundFull => ("refund_full", "Full refund", Info),
        RefundPartial => ("refund_partial", "Partial refund", Primary),
        Credit => ("credit", "Credit", Success),
        Deduction => ("deduction", "Deduction", Warning),
    }
}

impl AdjustmentType {
    pub fn is_refund(self) -> bool {
        matches!(self, AdjustmentType::RefundFull | AdjustmentType::RefundPartial)
    }
}

status_enum! {
    pub enum RelatedTo {
        Job => ("job", "Job", Light),
        Payment => ("payment", "Payment", Light),
        Wallet => ("wallet", "Wallet", Light),
    }
}

action_enum! {
    pub enum RefundAction {
        Approve => ("approve", "Approve", Normal, [optional(Note, "Approval note")]),
        Reject => ("reject", "Reject", Danger, [optional(Note, "Rejection note")]),
        AddNotes => ("add_notes", "Add internal notes", Normal, [required(Note, "Internal notes")]),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalTransaction {
    /// Job id or transaction id
    pub reference_id: String,
    pub original_amount: f64,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundAdjustment {
    pub id: String,
    #[serde(rename = "type")]
    pub adjustment_type: AdjustmentType,
    pub amount: f64,
    pub reason: String,
    pub related_to: RelatedTo,
    pub original_transaction: OriginalTransaction,
    pub approval_status: ApprovalStatus,
    pub requested_at: String,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub internal_notes: Option<String>,
}

impl RefundAdjustment {
    /// Appends a line to the internal notes
    pub fn add_note(&mut self, note: &str) {
        self.internal_notes = Some(match self.internal_notes.take() {
            Some(existing) if !existing.is_empty() => format!("{}\n{}", existing, note),
            _ => note.to_string(),
        });
    }
}

/// Body of `POST /api/refunds`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAdjustment {
    #[serde(rename = "type")]
    pub adjustment_type: AdjustmentType,
    pub amount: f64,
    pub reason: String,
    pub related_to: RelatedTo,
    pub reference_id: String,
    pub original_amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub internal_notes: Option<String>,
}

impl NewAdjustment {
    pub fn validate(&self) -> Result<(), String> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err("Amount must be greater than zero".into());
        }
        if self.reason.trim().is_empty() {
            return Err("Reason is required".into());
        }
        if self.reference_id.trim().is_empty() {
            return Err("Reference is required".into());
        }
        match self.adjustment_type {
            AdjustmentType::RefundPartial if self.amount >= self.original_amount => {
                Err("Partial refund must be less than the original amount".into())
            }
            AdjustmentType::RefundFull if (self.amount - self.original_amount).abs() > 0.005 => {
                Err("Full refund must equal the original amount".into())
            }
            AdjustmentType::Credit | AdjustmentType::Deduction
                if self.original_amount > 0.0 && self.amount > self.original_amount =>
            {
                Err("Amount cannot exceed the original amount".into())
            }
            _ => Ok(()),
        }
    }

    /// New records start pending
    pub fn into_adjustment(self, id: String, requested_at: String) -> RefundAdjustment {
        RefundAdjustment {
            id,
            adjustment_type: self.adjustment_type,
            amount: self.amount,
            reason: self.reason.trim().to_string(),
            related_to: self.related_to,
            original_transaction: OriginalTransaction {
                reference_id: self.reference_id.trim().to_string(),
                original_amount: self.original_amount,
                date: requested_at.get(..10).unwrap_or(&requested_at).to_string(),
                description: self.description.filter(|d| !d.trim().is_empty()),
            },
            approval_status: ApprovalStatus::Pending,
            requested_at,
            approved_by: None,
            internal_notes: self.internal_notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

impl RowActions for RefundAdjustment {
    type Action = RefundAction;

    fn available_actions(&self) -> Vec<RefundAction> {
        let mut actions = Vec::new();
        if self.approval_status == ApprovalStatus::Pending {
            actions.extend([RefundAction::Approve, RefundAction::Reject]);
        }
        actions.push(RefundAction::AddNotes);
        actions
    }
}

impl AdminAggregate for RefundAdjustment {
    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "refunds"
    }

    fn element_name() -> &'static str {
        "Adjustment"
    }

    fn list_name() -> &'static str {
        "Refunds & Adjustments"
    }

    fn detail_param() -> &'static str {
        "refund"
    }

    fn detail_value(&self) -> &str {
        &self.id
    }
}

impl ListRecord for RefundAdjustment {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.original_transaction.reference_id.as_str(),
            self.reason.as_str(),
        ];
        if let Some(desc) = &self.original_transaction.description {
            fields.push(desc.as_str());
        }
        fields
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "type" => self.adjustment_type.code() == value,
            "approval_status" => self.approval_status.code() == value,
            "related_to" => self.related_to.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.requested_at.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "amount" => Some(cmp_f64(self.amount, other.amount)),
            "requested_at" => Some(self.requested_at.cmp(&other.requested_at)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("type", "All types", AdjustmentType::options()),
            FilterSpec::select("approval_status", "All approval", ApprovalStatus::options()),
            FilterSpec::select("related_to", "Related to", RelatedTo::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search reference, reason..."
    }
}
