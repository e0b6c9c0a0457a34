pub mod aggregate;

pub use aggregate::{
    DocumentStatus, DocumentType, OverallStatus, Verification, VerificationAction,
    VerificationDocument,
};
