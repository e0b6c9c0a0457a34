use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers::{self, entity};
use crate::shared::state::AppState;
use crate::system;

/// Business routes under `/api`, all behind `require_auth`
pub fn configure_business_routes(state: AppState) -> Router {
    let extras = Router::new()
        .route("/api/dashboard", get(handlers::d400_dashboard::get))
        .route("/api/jobs/export", get(handlers::a001_job::export))
        .route("/api/dispatch/:id/eligible", get(handlers::a003_dispatch::eligible))
        .route("/api/cancellations/summary", get(handlers::a007_cancellation::summary))
        .route("/api/refunds", post(handlers::a009_refund::create))
        .route("/api/payments/metrics", get(handlers::a010_payment::metrics))
        .route("/api/ledger/export", get(handlers::a011_ledger::export))
        .route("/api/payouts/summary", get(handlers::a012_payout::summary))
        .with_state(state.clone());

    Router::new()
        .merge(entity::read_routes(state.jobs.clone()))
        .merge(entity::entity_routes(state.jobs_queue.clone()))
        .merge(entity::entity_routes(state.dispatch.clone()))
        .merge(entity::entity_routes(state.professionals.clone()))
        .merge(entity::entity_routes(state.companies.clone()))
        .merge(entity::entity_routes(state.verifications.clone()))
        .merge(entity::entity_routes(state.cancellations.clone()))
        .merge(entity::entity_routes(state.disputes.clone()))
        .merge(entity::entity_routes(state.refunds.clone()))
        .merge(entity::read_routes(state.payments.clone()))
        .merge(entity::read_routes(state.ledger.clone()))
        .merge(entity::entity_routes(state.payouts.clone()))
        .merge(entity::entity_routes(state.support_tickets.clone()))
        .merge(extras)
        .route_layer(middleware::from_fn_with_state(
            state,
            system::auth::middleware::require_auth,
        ))
}

/// The whole application: API, static `dist/` fallback, CORS and request log
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .merge(system::api::routes::configure_system_routes(state.clone()))
        .merge(configure_business_routes(state))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(system::middleware::request_logger::request_logger))
        .layer(cors)
}
