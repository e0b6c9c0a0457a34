pub mod aggregate;

pub use aggregate::{PaymentMethod, Payout, PayoutAction, PayoutStatus, PayoutSummary};
