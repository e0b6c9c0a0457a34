pub mod actions;
pub mod aggregate;
pub mod badge;
pub mod detail;
pub mod format;
pub mod listing;
pub mod metadata;
pub mod state_machine;
pub mod status;
