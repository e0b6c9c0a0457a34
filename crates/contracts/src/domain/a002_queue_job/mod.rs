pub mod aggregate;

pub use aggregate::{Priority, QueueJob, QueueJobAction, QueueJobStatus};
