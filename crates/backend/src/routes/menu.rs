//! Menu endpoint.

use axum::Json;
use axum::extract::State;

use crate::models::MenuItem;
use crate::state::FixtureState;

/// `GET /api/order/menu` - the static menu, no pagination.
pub async fn list(State(state): State<FixtureState>) -> Json<Vec<MenuItem>> {
    Json(state.menu())
}
