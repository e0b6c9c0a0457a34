use axum::extract::State;
use axum::Json;
use contracts::dashboards::d400_dashboard::DashboardResponse;

use crate::dashboards::d400_dashboard::service;
use crate::shared::state::AppState;

/// GET /api/dashboard
pub async fn get(State(state): State<AppState>) -> Json<DashboardResponse> {
    Json(service::compute(&state).await)
}
