//! Pizza Stand - standalone mock backend for the pizza storefront.
//!
//! Serves the classic seeded dataset over HTTP so a front-end dev server
//! can run against deterministic data without a real backend. Listens on
//! port 3000 by default, where the storefront expects its API.
//!
//! State is in-memory only; restart to reset.

#![cfg_attr(not(test), forbid(unsafe_code))]

use pizza_stand_backend::{ServerConfig, seed, server};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pizza_stand_backend=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Seed the classic dataset with the configured behavior toggles
    let state = seed::classic()
        .login_on_register(config.options.login_on_register)
        .build();

    // Start server
    let addr = config.socket_addr();
    tracing::info!("pizza stand listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    server::serve(listener, state).await.expect("Server error");
}
