pub mod aggregate;

pub use aggregate::{platform_earnings, LedgerEntry, LedgerStatus, LedgerType};
