pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod refresh;
pub mod service;

pub use service::{from_config, Authenticator};
