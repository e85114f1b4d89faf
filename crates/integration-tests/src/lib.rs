//! Integration tests for Pizza Stand.
//!
//! Every test builds its own fixture state, spawns it on an OS-assigned
//! port, and drives it over real HTTP - exactly the traffic a
//! browser-automation suite would generate against the mocked routes.
//!
//! # Test Categories
//!
//! - `auth` - Session lifecycle (authenticate, register, logout)
//! - `user` - Current-user query and profile updates
//! - `franchise` - Franchise/store administration and listing
//! - `order` - Menu and order placement

#![cfg_attr(not(test), forbid(unsafe_code))]

use pizza_stand_backend::{Backend, FixtureState};
use reqwest::{Client, Response};
use serde_json::Value;

/// A spawned fixture plus an HTTP client pointed at it.
pub struct TestContext {
    pub client: Client,
    backend: Backend,
}

impl TestContext {
    /// Spawn a fixture server for the given state.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be spawned; no test can proceed without
    /// it.
    pub async fn launch(state: FixtureState) -> Self {
        let backend = Backend::spawn(state).await.expect("spawn fixture server");
        Self {
            client: Client::new(),
            backend,
        }
    }

    /// Absolute URL for a path on the spawned server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.backend.url(path)
    }

    /// `PUT /api/auth` with the given credentials.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.client
            .put(self.url("/api/auth"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request")
    }

    /// GET a path, asserting a 200 response, and decode the JSON body.
    ///
    /// # Panics
    ///
    /// Panics on transport errors, a non-200 status, or a non-JSON body.
    pub async fn get_json(&self, path: &str) -> Value {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request");
        assert_eq!(response.status(), reqwest::StatusCode::OK, "GET {path}");
        response.json().await.expect("JSON body")
    }
}
