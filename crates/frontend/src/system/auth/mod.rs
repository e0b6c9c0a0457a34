pub mod api;
pub mod context;
pub mod session;
pub mod storage;

pub use context::{use_auth, AuthContext, AuthProvider};
