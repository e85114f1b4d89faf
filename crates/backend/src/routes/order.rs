//! Order placement endpoint.

use axum::Json;
use axum::extract::State;

use crate::models::{OrderDraft, Receipt};
use crate::state::FixtureState;

/// `POST /api/order` - echo the payload with a generated order id, a date
/// stamp, and a fabricated settlement token. No stock, pricing, or payment
/// validation.
pub async fn create(State(state): State<FixtureState>, Json(draft): Json<OrderDraft>) -> Json<Receipt> {
    Json(state.place_order(draft))
}
