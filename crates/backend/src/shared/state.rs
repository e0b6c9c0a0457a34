use std::sync::Arc;

use contracts::domain::{
    a001_job::Job, a002_queue_job::QueueJob, a003_dispatch::DispatchJob,
    a004_professional::Professional, a005_company::Company, a006_verification::Verification,
    a007_cancellation::Cancellation, a008_dispute::Dispute, a009_refund::RefundAdjustment,
    a010_payment::Payment, a011_ledger::LedgerEntry, a012_payout::Payout,
    a013_support_ticket::SupportTicket,
};

use super::config::Config;
use super::store::EntityStore;
use crate::domain;
use crate::system::auth::{self, Authenticator};

/// Shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth: Arc<dyn Authenticator>,
    pub jobs: Arc<EntityStore<Job>>,
    pub jobs_queue: Arc<EntityStore<QueueJob>>,
    pub dispatch: Arc<EntityStore<DispatchJob>>,
    pub professionals: Arc<EntityStore<Professional>>,
    pub companies: Arc<EntityStore<Company>>,
    pub verifications: Arc<EntityStore<Verification>>,
    pub cancellations: Arc<EntityStore<Cancellation>>,
    pub disputes: Arc<EntityStore<Dispute>>,
    pub refunds: Arc<EntityStore<RefundAdjustment>>,
    pub payments: Arc<EntityStore<Payment>>,
    pub ledger: Arc<EntityStore<LedgerEntry>>,
    pub payouts: Arc<EntityStore<Payout>>,
    pub support_tickets: Arc<EntityStore<SupportTicket>>,
}

impl AppState {
    /// Stores filled with the built-in sample data
    pub fn seeded(config: Config) -> Self {
        let auth = auth::from_config(&config.auth);
        Self {
            config: Arc::new(config),
            auth,
            jobs: Arc::new(EntityStore::new(domain::a001_job::service::seed())),
            jobs_queue: Arc::new(EntityStore::new(domain::a002_queue_job::service::seed())),
            dispatch: Arc::new(EntityStore::new(domain::a003_dispatch::service::seed())),
            professionals: Arc::new(EntityStore::new(domain::a004_professional::service::seed())),
            companies: Arc::new(EntityStore::new(domain::a005_company::service::seed())),
            verifications: Arc::new(EntityStore::new(domain::a006_verification::service::seed())),
            cancellations: Arc::new(EntityStore::new(domain::a007_cancellation::service::seed())),
            disputes: Arc::new(EntityStore::new(domain::a008_dispute::service::seed())),
            refunds: Arc::new(EntityStore::new(domain::a009_refund::service::seed())),
            payments: Arc::new(EntityStore::new(domain::a010_payment::service::seed())),
            ledger: Arc::new(EntityStore::new(domain::a011_ledger::service::seed())),
            payouts: Arc::new(EntityStore::new(domain::a012_payout::service::seed())),
            support_tickets: Arc::new(EntityStore::new(domain::a013_support_ticket::service::seed())),
        }
    }
}
