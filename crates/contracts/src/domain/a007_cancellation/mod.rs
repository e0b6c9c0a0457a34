pub mod aggregate;

pub use aggregate::{
    summarize, Cancellation, CancellationAction, CancellationReason, CancellationSummary,
    InitiatedBy, ProfessionalImpact, ReasonCount,
};
