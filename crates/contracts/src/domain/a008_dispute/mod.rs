pub mod aggregate;

pub use aggregate::{Dispute, DisputeAction, DisputeJobStatus, DisputeReason, DisputeStatus, RaisedBy};
