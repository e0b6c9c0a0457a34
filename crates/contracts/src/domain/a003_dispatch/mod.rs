pub mod aggregate;

pub use aggregate::{
    rank_candidates, Availability, DispatchAction, DispatchJob, DispatchPriority, DispatchStatus,
    EligibleProfessional, RankedCandidate,
};
