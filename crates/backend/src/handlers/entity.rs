use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use contracts::shared::actions::{ActionRequest, RowActions};
use contracts::shared::aggregate::AdminAggregate;
use contracts::shared::listing::{apply_query, ListQuery, ListRecord, Paginated};
use contracts::shared::metadata::Stored;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::actions::ApplyAction;
use crate::shared::error::ApiError;
use crate::shared::store::EntityStore;

/// GET /api/{collection}
pub async fn list<T>(
    State(store): State<Arc<EntityStore<T>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Paginated<Stored<T>>>
where
    T: ListRecord + AdminAggregate + Clone + Send + Sync,
{
    let query = ListQuery::from_params(&params);
    Json(store.read(|items| apply_query(items, &query)).await)
}

/// GET /api/{collection}/:id
pub async fn get_by_id<T>(
    State(store): State<Arc<EntityStore<T>>>,
    Path(id): Path<String>,
) -> Result<Json<Stored<T>>, ApiError>
where
    T: ListRecord + AdminAggregate + Clone + Send + Sync,
{
    store.get(&id).await.map(Json)
}

/// POST /api/{collection}/:id/actions
pub async fn act<T>(
    State(store): State<Arc<EntityStore<T>>>,
    Path(id): Path<String>,
    body: Result<Json<ActionRequest<<T as RowActions>::Action>>, JsonRejection>,
) -> Result<Json<Stored<T>>, ApiError>
where
    T: ListRecord + AdminAggregate + ApplyAction + Clone + Send + Sync,
    <T as RowActions>::Action: DeserializeOwned,
{
    let Json(request) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    store.act(&id, request).await.map(Json)
}

/// List and detail routes of a read-only collection
pub fn read_routes<T>(store: Arc<EntityStore<T>>) -> Router
where
    T: ListRecord + AdminAggregate + Clone + Serialize + Send + Sync + 'static,
{
    let base = format!("/api/{}", T::collection_name());
    Router::new()
        .route(&base, get(list::<T>))
        .route(&format!("{}/:id", base), get(get_by_id::<T>))
        .with_state(store)
}

/// List, detail and row-action routes
pub fn entity_routes<T>(store: Arc<EntityStore<T>>) -> Router
where
    T: ListRecord + AdminAggregate + ApplyAction + Clone + Serialize + Send + Sync + 'static,
    <T as RowActions>::Action: DeserializeOwned + Send,
{
    let actions = Router::new()
        .route(
            &format!("/api/{}/:id/actions", T::collection_name()),
            post(act::<T>),
        )
        .with_state(store.clone());
    read_routes(store).merge(actions)
}
