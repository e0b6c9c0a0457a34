use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a012_payout::PayoutSummary;
use contracts::shared::listing::{filter_sorted, ListQuery};

use crate::shared::state::AppState;

/// GET /api/payouts/summary
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<PayoutSummary> {
    let query = ListQuery::from_params(&params);
    let summary = state
        .payouts
        .read(|items| PayoutSummary::compute(filter_sorted(items, &query).into_iter().map(|s| &s.item)))
        .await;
    Json(summary)
}
