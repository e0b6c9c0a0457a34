use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::a004_professional::AccountStatus;
use crate::shared::actions::RowActions;
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::state_machine::StatusMachine;
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

status_enum! {
    pub enum ApprovalStatus {
        Pending => ("pending", "Pending", Warning),
        Approved => ("approved", "Approved", Success),
        Rejected => ("rejected", "Rejected", Danger),
    }
}

impl StatusMachine for ApprovalStatus {
    fn can_transition(from: Self, to: Self) -> bool {
        use ApprovalStatus::*;
        matches!((from, to), (Pending, Approved) | (Pending, Rejected))
    }
}

status_enum! {
    pub enum EmployeeRole {
        Admin => ("admin", "Admin", Primary),
        Manager => ("manager", "Manager", Info),
        Technician => ("technician", "Technician", Light),
    }
}

action_enum! {
    pub enum CompanyAction {
        Approve => ("approve", "Approve company account", Normal, []),
        Reject => ("reject", "Reject company account", Danger, [optional(Note, "Rejection note")]),
        Suspend => ("suspend", "Suspend", Danger, []),
        Reactivate => ("reactivate", "Reactivate", Normal, []),
        ManageEmployees => ("manage_employees", "Manage employee access", Navigate { param: "company", chat: false }, []),
        AssignRoles => ("assign_roles", "Assign roles", Normal, [
            required(Target, "Employee id"),
            required(Value, "Role (admin, manager, technician)")
        ]),
        JobDistribution => ("job_distribution", "Monitor job distribution", Normal, [required(Note, "Distribution note")]),
        UpdatePlan => ("update_plan", "Update subscription plan", Normal, [required(Value, "Plan (Trial, Standard, Pro, Enterprise)")]),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyEmployee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: EmployeeRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub company_name: String,
    pub contact_email: String,
    pub contact_name: String,
    pub subscription_plan: String,
    pub employees_count: u32,
    pub employees: Vec<CompanyEmployee>,
    pub approval_status: ApprovalStatus,
    pub account_status: AccountStatus,
    pub total_jobs: u32,
    pub completed_jobs: u32,
    pub completion_rate: f64,
    pub avg_rating: f64,
    #[serde(default)]
    pub job_distribution_note: Option<String>,
}

impl Company {
    pub fn awaiting_review(&self) -> bool {
        self.approval_status == ApprovalStatus::Pending
            && self.account_status == AccountStatus::PendingApproval
    }
}

impl RowActions for Company {
    type Action = CompanyAction;

    fn available_actions(&self) -> Vec<CompanyAction> {
        use CompanyAction::*;

        let mut actions = Vec::new();
        if self.awaiting_review() {
            actions.extend([Approve, Reject]);
        }
        match self.account_status {
            AccountStatus::Active => actions.push(Suspend),
            AccountStatus::Suspended => actions.push(Reactivate),
            _ => {}
        }
        actions.push(ManageEmployees);
        if self.account_status != AccountStatus::Rejected {
            actions.extend([AssignRoles, JobDistribution, UpdatePlan]);
        }
        actions
    }
}

impl AdminAggregate for Company {
    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "companies"
    }

    fn element_name() -> &'static str {
        "Company"
    }

    fn list_name() -> &'static str {
        "Companies"
    }

    fn detail_param() -> &'static str {
        "company"
    }

    fn detail_value(&self) -> &str {
        &self.id
    }
}

impl ListRecord for Company {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.company_name.as_str(),
            self.contact_name.as_str(),
            self.contact_email.as_str(),
        ]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "approval_status" => self.approval_status.code() == value,
            "account_status" => self.account_status.code() == value,
            _ => true,
        }
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "company_name" => Some(self.company_name.cmp(&other.company_name)),
            "total_jobs" => Some(self.total_jobs.cmp(&other.total_jobs)),
            "avg_rating" => Some(cmp_f64(self.avg_rating, other.avg_rating)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("approval_status", "All approval", ApprovalStatus::options()),
            FilterSpec::select("account_status", "All statuses", AccountStatus::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search by company or contact..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::tests::codes;
    use crate::shared::state_machine::tests::assert_edges;
    use crate::shared::status::tests::assert_total;

    fn company(approval: ApprovalStatus, account: AccountStatus) -> Company {
        Company {
            id: "3".into(),
            company_name: "QuickRepair LLC".into(),
            contact_email: "contact@quickrepair.io".into(),
            contact_name: "Alex Chen".into(),
            subscription_plan: "Standard".into(),
            employees_count: 1,
            employees: vec![CompanyEmployee {
                id: "e6".into(),
                name: "Alex Chen".into(),
                email: "alex@quickrepair.io".into(),
                role: EmployeeRole::Admin,
            }],
            approval_status: approval,
            account_status: account,
            total_jobs: 0,
            completed_jobs: 0,
            completion_rate: 0.0,
            avg_rating: 0.0,
            job_distribution_note: None,
        }
    }

    #[test]
    fn test_lookups_and_machine() {
        assert_total::<ApprovalStatus>();
        assert_total::<EmployeeRole>();
        use ApprovalStatus::*;
        assert_edges(&[(Pending, Approved), (Pending, Rejected)]);
    }

    #[test]
    fn test_review_actions_need_both_pending() {
        let c = company(ApprovalStatus::Pending, AccountStatus::PendingApproval);
        assert_eq!(
            codes(&c.available_actions()),
            vec![
                "approve",
                "reject",
                "manage_employees",
                "assign_roles",
                "job_distribution",
                "update_plan"
            ]
        );

        let c = company(ApprovalStatus::Approved, AccountStatus::Active);
        let actions = c.available_actions();
        assert!(!actions.contains(&CompanyAction::Approve));
        assert!(actions.contains(&CompanyAction::Suspend));
    }

    #[test]
    fn test_rejected_company_is_read_only() {
        let c = company(ApprovalStatus::Rejected, AccountStatus::Rejected);
        assert_eq!(codes(&c.available_actions()), vec!["manage_employees"]);
    }
}
