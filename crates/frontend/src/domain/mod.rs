pub mod a001_job;
pub mod a002_queue_job;
pub mod a003_dispatch;
pub mod a004_professional;
pub mod a005_company;
pub mod a006_verification;
pub mod a007_cancellation;
pub mod a008_dispute;
pub mod a009_refund;
pub mod a010_payment;
pub mod a011_ledger;
pub mod a012_payout;
pub mod a013_support_ticket;
