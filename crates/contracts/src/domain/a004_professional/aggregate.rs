use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::actions::RowActions;
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::state_machine::StatusMachine;
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

status_enum! {
    pub enum VerificationStatus {
        Verified => ("verified", "Verified", Success),
        Pending => ("pending", "Pending", Warning),
        Rejected => ("rejected", "Rejected", Danger),
    }
}

status_enum! {
    /// Account lifecycle of professionals and companies
    pub enum AccountStatus {
        Active => ("active", "Active", Success),
        Suspended => ("suspended", "Suspended", Danger),
        PendingApproval => ("pending_approval", "Pending approval", Warning),
        Rejected => ("rejected", "Rejected", Danger),
    }
}

impl StatusMachine for AccountStatus {
    fn can_transition(from: Self, to: Self) -> bool {
        use AccountStatus::*;
        matches!(
            (from, to),
            (PendingApproval, Active)
                | (PendingApproval, Rejected)
                | (Active, Suspended)
                | (Suspended, Active)
        )
    }
}

pub const SUBSCRIPTION_PLANS: &[&str] = &["Trial", "Standard", "Pro", "Enterprise"];

action_enum! {
    pub enum ProfessionalAction {
        Approve => ("approve", "Approve application", Normal, []),
        Reject => ("reject", "Reject application", Danger, [optional(Note, "Rejection note")]),
        Suspend => ("suspend", "Suspend account", Danger, [optional(Note, "Reason")]),
        Reactivate => ("reactivate", "Reactivate account", Normal, []),
        AdjustCommission => ("adjust_commission", "Adjust commission rate", Normal, [required(Amount, "Commission rate (%)")]),
        UpdatePlan => ("update_plan", "Update subscription plan", Normal, [required(Value, "Plan (Trial, Standard, Pro, Enterprise)")]),
        ViewDocuments => ("view_documents", "View uploaded documents", Navigate { param: "documents", chat: false }, []),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub email: String,
    pub service_categories: Vec<String>,
    pub service_areas: Vec<String>,
    pub rating: f64,
    pub total_jobs: u32,
    pub completion_rate: f64,
    pub verification_status: VerificationStatus,
    pub documents_count: u32,
    pub subscription_plan: String,
    pub commission_rate: f64,
    pub payout_method: String,
    pub account_status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
}

impl RowActions for Professional {
    type Action = ProfessionalAction;

    fn available_actions(&self) -> Vec<ProfessionalAction> {
        use ProfessionalAction::*;

        let mut actions = Vec::new();
        match self.account_status {
            AccountStatus::PendingApproval => actions.extend([Approve, Reject]),
            AccountStatus::Active => actions.push(Suspend),
            AccountStatus::Suspended => actions.push(Reactivate),
            AccountStatus::Rejected => {}
        }
        if self.account_status != AccountStatus::Rejected {
            actions.extend([AdjustCommission, UpdatePlan]);
        }
        actions.push(ViewDocuments);
        actions
    }
}

impl AdminAggregate for Professional {
    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "professionals"
    }

    fn element_name() -> &'static str {
        "Professional"
    }

    fn list_name() -> &'static str {
        "Professionals"
    }

    fn detail_param() -> &'static str {
        "pro"
    }

    fn detail_value(&self) -> &str {
        &self.id
    }
}

impl ListRecord for Professional {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "verification_status" => self.verification_status.code() == value,
            "account_status" => self.account_status.code() == value,
            _ => true,
        }
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "name" => Some(self.name.cmp(&other.name)),
            "rating" => Some(cmp_f64(self.rating, other.rating)),
            "total_jobs" => Some(self.total_jobs.cmp(&other.total_jobs)),
            "commission_rate" => Some(cmp_f64(self.commission_rate, other.commission_rate)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("verification_status", "All verification", VerificationStatus::options()),
            FilterSpec::select("account_status", "All statuses", AccountStatus::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search by name or email..."
    }
}
