//! Current-user and profile-update endpoints.

use axum::Json;
use axum::extract::{Path, State};
use pizza_stand_core::UserId;

use super::auth::AuthResponse;
use crate::error::Result;
use crate::models::{User, UserUpdate};
use crate::state::FixtureState;

/// `GET /api/user/me` - whoever the session slot holds, or `null`.
pub async fn me(State(state): State<FixtureState>) -> Json<Option<User>> {
    Json(state.current_user())
}

/// `PUT /api/user/{id}` - merge a partial record onto the stored user.
///
/// Returns the merged record with a fresh session token.
pub async fn update(
    State(state): State<FixtureState>,
    Path(id): Path<UserId>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<AuthResponse>> {
    let (user, token) = state.update_user(id, &update)?;
    Ok(Json(AuthResponse { user, token }))
}
