use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a003_dispatch::RankedCandidate;

use crate::domain::a003_dispatch::service;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

/// GET /api/dispatch/:id/eligible
pub async fn eligible(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RankedCandidate>>, ApiError> {
    let job = state.dispatch.get(&id).await?;
    Ok(Json(service::eligible_for(&job.item)))
}
