pub mod actions;
pub mod config;
pub mod csv_export;
pub mod error;
pub mod store;
pub mod state;
