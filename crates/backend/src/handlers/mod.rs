pub mod a001_job;
pub mod a003_dispatch;
pub mod a007_cancellation;
pub mod a009_refund;
pub mod a010_payment;
pub mod a011_ledger;
pub mod a012_payout;
pub mod d400_dashboard;
pub mod entity;
