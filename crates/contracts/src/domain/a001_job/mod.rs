pub mod aggregate;

pub use aggregate::{Job, JobStatus, PaymentStatus, ASSIGNABLE_PROFESSIONALS, SERVICE_CATEGORIES};
