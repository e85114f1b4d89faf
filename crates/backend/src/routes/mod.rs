//! HTTP routes for the mocked pizza API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                              - Liveness check
//!
//! # Session
//! PUT    /api/auth                            - Authenticate
//! POST   /api/auth                            - Register
//! DELETE /api/auth                            - Logout
//! GET    /api/user/me                         - Current user (or null)
//! PUT    /api/user/{id}                       - Update user
//!
//! # Menu & orders
//! GET    /api/order/menu                      - Static menu
//! POST   /api/order                           - Place order (echo + receipt)
//!
//! # Franchises & stores
//! GET    /api/franchise[?name=&page=&limit=]  - List franchises
//! GET    /api/franchise/{id}                  - Franchises a user administers
//! POST   /api/franchise                       - Create franchise
//! POST   /api/franchise/{id}/store            - Create store
//! DELETE /api/franchise/{id}/store/{store_id} - Delete store
//! ```

pub mod auth;
pub mod franchise;
pub mod menu;
pub mod order;
pub mod user;

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::FixtureState;

/// Assemble the full fixture router.
///
/// Exactly one registration per path; per-method behavior hangs off the
/// method router, never off overlapping registrations. CORS is wide open so
/// a front-end dev server on another origin can talk to the fixture.
#[must_use]
pub fn router(state: FixtureState) -> Router {
    Router::new()
        .route(
            "/api/auth",
            put(auth::login).post(auth::register).delete(auth::logout),
        )
        .route("/api/user/me", get(user::me))
        .route("/api/user/{id}", put(user::update))
        .route("/api/order/menu", get(menu::list))
        .route("/api/order", post(order::create))
        .route("/api/franchise", get(franchise::list).post(franchise::create))
        .route("/api/franchise/{id}", get(franchise::list_for_user))
        .route("/api/franchise/{id}/store", post(franchise::create_store))
        .route(
            "/api/franchise/{id}/store/{store_id}",
            delete(franchise::delete_store),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running; not part of the mocked contract.
async fn health() -> &'static str {
    "ok"
}
