pub mod aggregate;

pub use aggregate::{
    AccountStatus, Professional, ProfessionalAction, VerificationStatus, SUBSCRIPTION_PLANS,
};
