use contracts::domain::a004_professional::AccountStatus;
use contracts::domain::a005_company::{
    ApprovalStatus, Company, CompanyAction, CompanyEmployee, EmployeeRole,
};
use contracts::shared::actions::{ActionError, ActionKind, ActionParams};
use contracts::shared::state_machine::StatusMachine;
use contracts::shared::status::StatusDisplay;

use crate::domain::a004_professional::service::parse_plan;
use crate::shared::actions::ApplyAction;

fn parse_role(value: &str) -> Result<EmployeeRole, ActionError> {
    EmployeeRole::from_code(&value.trim().to_ascii_lowercase()).ok_or_else(|| {
        ActionError::InvalidParam(format!(
            "unknown role '{}', expected admin, manager or technician",
            value
        ))
    })
}

impl ApplyAction for Company {
    fn apply(&mut self, action: CompanyAction, params: &ActionParams) -> Result<(), ActionError> {
        match action {
            CompanyAction::Approve => {
                self.approval_status = self.approval_status.transition(ApprovalStatus::Approved)?;
                self.account_status = self.account_status.transition(AccountStatus::Active)?;
            }
            CompanyAction::Reject => {
                self.approval_status = self.approval_status.transition(ApprovalStatus::Rejected)?;
                self.account_status = self.account_status.transition(AccountStatus::Rejected)?;
                if let Some(note) = params.note() {
                    tracing::info!("Company {} rejected: {}", self.company_name, note);
                }
            }
            CompanyAction::Suspend => {
                self.account_status = self.account_status.transition(AccountStatus::Suspended)?;
            }
            CompanyAction::Reactivate => {
                self.account_status = self.account_status.transition(AccountStatus::Active)?;
            }
            CompanyAction::AssignRoles => {
                let employee_id = params.target()?;
                let role = parse_role(params.value()?)?;
                let employee = self
                    .employees
                    .iter_mut()
                    .find(|e| e.id == employee_id)
                    .ok_or_else(|| {
                        ActionError::InvalidParam(format!("unknown employee '{}'", employee_id))
                    })?;
                employee.role = role;
            }
            CompanyAction::JobDistribution => {
                self.job_distribution_note = params.note().map(str::to_string);
            }
            CompanyAction::UpdatePlan => {
                self.subscription_plan = parse_plan(params.value()?)?.to_string();
            }
            CompanyAction::ManageEmployees => {
                return Err(ActionError::NotAvailable(action.code()));
            }
        }
        Ok(())
    }
}

fn employee(id: &str, name: &str, email: &str, role: EmployeeRole) -> CompanyEmployee {
    CompanyEmployee {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
    }
}

#[allow(clippy::too_many_arguments)]
fn company(
    id: &str,
    name: &str,
    contact_email: &str,
    contact_name: &str,
    plan: &str,
    employees_count: u32,
    employees: Vec<CompanyEmployee>,
    approval: ApprovalStatus,
    account: AccountStatus,
    jobs: (u32, u32),
    completion_rate: f64,
    avg_rating: f64,
    distribution_note: Option<&str>,
) -> Company {
    Company {
        id: id.into(),
        company_name: name.into(),
        contact_email: contact_email.into(),
        contact_name: contact_name.into(),
        subscription_plan: plan.into(),
        employees_count,
        employees,
        approval_status: approval,
        account_status: account,
        total_jobs: jobs.0,
        completed_jobs: jobs.1,
        completion_rate,
        avg_rating,
        job_distribution_note: distribution_note.map(Into::into),
    }
}

pub fn seed() -> Vec<Company> {
    use EmployeeRole::*;
    vec![
        company(
            "1",
            "ProFix Services Co.",
            "admin@profix.co",
            "John Smith",
            "Enterprise",
            12,
            vec![
                employee("e1", "John Smith", "john@profix.co", Admin),
                employee("e2", "Jane Doe", "jane@profix.co", Manager),
                employee("e3", "Bob Wilson", "bob@profix.co", Technician),
            ],
            ApprovalStatus::Approved,
            AccountStatus::Active,
            (340, 328),
            96.0,
            4.7,
            Some("Balanced across teams"),
        ),
        company(
            "2",
            "HomeCare Solutions",
            "info@homecare-sol.com",
            "Maria Garcia",
            "Pro",
            8,
            vec![
                employee("e4", "Maria Garcia", "maria@homecare-sol.com", Admin),
                employee("e5", "Carlos Ruiz", "carlos@homecare-sol.com", Technician),
            ],
            ApprovalStatus::Approved,
            AccountStatus::Active,
            (156, 148),
            95.0,
            4.5,
            None,
        ),
        company(
            "3",
            "QuickRepair LLC",
            "hello@quickrepair.io",
            "Alex Chen",
            "Standard",
            5,
            vec![employee("e6", "Alex Chen", "alex@quickrepair.io", Admin)],
            ApprovalStatus::Pending,
            AccountStatus::PendingApproval,
            (0, 0),
            0.0,
            0.0,
            None,
        ),
        company(
            "4",
            "AllRound Maintenance",
            "contact@allround.com",
            "David Brown",
            "Enterprise",
            20,
            vec![
                employee("e7", "David Brown", "david@allround.com", Admin),
                employee("e8", "Sarah Lee", "sarah@allround.com", Manager),
            ],
            ApprovalStatus::Approved,
            AccountStatus::Suspended,
            (520, 498),
            96.0,
            4.6,
            None,
        ),
        company(
            "5",
            "Clean & Fix Team",
            "team@cleanfix.xyz",
            "Emma Wilson",
            "Trial",
            3,
            vec![employee("e9", "Emma Wilson", "emma@cleanfix.xyz", Admin)],
            ApprovalStatus::Approved,
            AccountStatus::Active,
            (42, 40),
            95.0,
            4.8,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::actions::RowActions;

    #[test]
    fn test_approve_activates_pending_company() {
        let mut company = seed().remove(2);
        assert!(company.is_available(CompanyAction::Approve));
        company
            .apply(CompanyAction::Approve, &ActionParams::default())
            .unwrap();
        assert_eq!(company.approval_status, ApprovalStatus::Approved);
        assert_eq!(company.account_status, AccountStatus::Active);
        assert!(!company.is_available(CompanyAction::Approve));
    }

    #[test]
    fn test_reject_sets_both_statuses() {
        let mut company = seed().remove(2);
        company
            .apply(CompanyAction::Reject, &ActionParams::default())
            .unwrap();
        assert_eq!(company.approval_status, ApprovalStatus::Rejected);
        assert_eq!(company.account_status, AccountStatus::Rejected);
    }

    #[test]
    fn test_assign_role_to_employee() {
        let mut company = seed().remove(0);
        let params = ActionParams {
            target: Some("e3".into()),
            value: Some("Manager".into()),
            ..Default::default()
        };
        company.apply(CompanyAction::AssignRoles, &params).unwrap();
        assert_eq!(company.employees[2].role, EmployeeRole::Manager);

        let unknown = ActionParams {
            target: Some("e99".into()),
            value: Some("admin".into()),
            ..Default::default()
        };
        assert!(company.apply(CompanyAction::AssignRoles, &unknown).is_err());
    }

    #[test]
    fn test_approved_company_cannot_be_approved_again() {
        let mut company = seed().remove(0);
        let err = company
            .apply(CompanyAction::Approve, &ActionParams::default())
            .unwrap_err();
        assert!(matches!(err, ActionError::Transition(_)));
    }
}
