use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a009_refund::{NewAdjustment, RefundAdjustment};
use contracts::shared::metadata::Stored;
use contracts::shared::status::StatusDisplay;

use crate::domain::a009_refund::service;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;

/// POST /api/refunds
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    body: Result<Json<NewAdjustment>, JsonRejection>,
) -> Result<(StatusCode, Json<Stored<RefundAdjustment>>), ApiError> {
    let Json(new) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let adjustment = service::create(new, chrono::Utc::now())?;
    tracing::info!(
        "Refund adjustment {} requested by {} ({} {})",
        adjustment.id,
        claims.email,
        adjustment.adjustment_type.code(),
        adjustment.amount
    );
    let stored = state.refunds.insert(adjustment).await;
    Ok((StatusCode::CREATED, Json(stored)))
}
