pub mod aggregate;

pub use aggregate::{SubmittedByType, SupportTicket, TicketAction, TicketStatus};
