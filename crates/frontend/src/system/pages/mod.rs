pub mod detail;
pub mod login;
