use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::Response;
use contracts::shared::listing::{filter_sorted, ListQuery};

use crate::shared::csv_export::csv_response;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

/// GET /api/jobs/export
pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let query = ListQuery::from_params(&params);
    state
        .jobs
        .read(|items| {
            let rows = filter_sorted(items, &query);
            tracing::info!("Jobs export: {} rows", rows.len());
            csv_response("jobs.csv", rows.into_iter().map(|s| &s.item))
        })
        .await
}
