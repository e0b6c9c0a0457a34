pub mod aggregate;

pub use aggregate::{ApprovalStatus, Company, CompanyAction, CompanyEmployee, EmployeeRole};
