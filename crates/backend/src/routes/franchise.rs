//! Franchise and store administration endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use pizza_stand_core::{FranchiseId, StoreId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::Result;
use crate::models::{CreateFranchise, CreateStore, Franchise, Store};
use crate::state::FixtureState;

/// Query parameters accepted by the franchise listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Name pattern with `*` wildcards.
    pub name: Option<String>,
    /// Zero-based page index, only meaningful together with `limit`.
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Response envelope for `GET /api/franchise`.
#[derive(Debug, Serialize)]
pub struct FranchiseList {
    pub franchises: Vec<Franchise>,
    /// Whether a further page has content.
    pub more: bool,
}

/// `GET /api/franchise` - the full collection, filtered and paginated.
pub async fn list(
    State(state): State<FixtureState>,
    Query(query): Query<ListQuery>,
) -> Json<FranchiseList> {
    let (franchises, more) =
        state.list_franchises(query.name.as_deref(), query.page, query.limit);
    Json(FranchiseList { franchises, more })
}

/// `GET /api/franchise/{id}` - franchises the given user administers.
pub async fn list_for_user(
    State(state): State<FixtureState>,
    Path(user): Path<UserId>,
) -> Json<Vec<Franchise>> {
    Json(state.franchises_for(user))
}

/// `POST /api/franchise` - append a new franchise to the collection.
pub async fn create(
    State(state): State<FixtureState>,
    Json(req): Json<CreateFranchise>,
) -> (StatusCode, Json<Franchise>) {
    (StatusCode::CREATED, Json(state.create_franchise(req)))
}

/// `POST /api/franchise/{id}/store` - append a store to the franchise.
pub async fn create_store(
    State(state): State<FixtureState>,
    Path(franchise): Path<FranchiseId>,
    Json(req): Json<CreateStore>,
) -> Result<(StatusCode, Json<Store>)> {
    let store = state.create_store(franchise, &req.name)?;
    Ok((StatusCode::CREATED, Json(store)))
}

/// `DELETE /api/franchise/{id}/store/{store_id}` - remove the store.
///
/// Succeeds with an empty JSON body even when the store is already gone.
pub async fn delete_store(
    State(state): State<FixtureState>,
    Path((franchise, store)): Path<(FranchiseId, StoreId)>,
) -> Json<Value> {
    state.delete_store(franchise, store);
    Json(json!({}))
}
