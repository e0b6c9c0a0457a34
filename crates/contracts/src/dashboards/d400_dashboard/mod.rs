pub mod dto;

pub use dto::{
    sort_urgent, DashboardResponse, FinancialMetrics, IssuePriority, OperationalMetrics,
    UrgentItem, UrgentType,
};
