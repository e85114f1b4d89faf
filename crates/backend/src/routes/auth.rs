//! Session endpoints: authenticate, register, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::User;
use crate::state::FixtureState;

/// Body of `PUT /api/auth`.
///
/// Fields default to empty so a missing credential falls through to the
/// directory lookup and comes back `unauthorized`, not a decode error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /api/auth`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response of every endpoint that opens or refreshes a session.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// `PUT /api/auth` - authenticate against the user directory.
pub async fn login(
    State(state): State<FixtureState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let (user, token) = state.login(&req.email, &req.password)?;
    Ok(Json(AuthResponse { user, token }))
}

/// `POST /api/auth` - register a new diner.
pub async fn register(
    State(state): State<FixtureState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    let (user, token) = state.register(&req.name, &req.email, &req.password)?;
    Ok(Json(AuthResponse { user, token }))
}

/// `DELETE /api/auth` - drop the session unconditionally.
pub async fn logout(State(state): State<FixtureState>) -> StatusCode {
    state.logout();
    StatusCode::NO_CONTENT
}
