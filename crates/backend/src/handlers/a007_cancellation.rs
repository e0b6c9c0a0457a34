use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a007_cancellation::{summarize, CancellationSummary};
use contracts::shared::listing::{filter_sorted, ListQuery};

use crate::shared::state::AppState;

/// GET /api/cancellations/summary
///
/// Honors the same filters as the list.
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<CancellationSummary> {
    let query = ListQuery::from_params(&params);
    let summary = state
        .cancellations
        .read(|items| summarize(filter_sorted(items, &query).into_iter().map(|s| &s.item)))
        .await;
    Json(summary)
}
