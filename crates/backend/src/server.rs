//! Serving the fixture over real HTTP.
//!
//! Two entry points: [`Backend::spawn`] for tests (OS-assigned port,
//! abort-on-drop) and [`serve`] for the standalone binary (graceful
//! shutdown on signal).

use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::routes;
use crate::state::FixtureState;

/// A fixture server bound to an OS-assigned port.
///
/// Binds `127.0.0.1:0` for CI-safe port allocation. The serve task is
/// aborted when the handle drops, so each test's server dies with its
/// `Backend`.
pub struct Backend {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl Backend {
    /// Bind a local port and start serving the fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be bound.
    pub async fn spawn(state: FixtureState) -> std::io::Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        let app = routes::router(state);

        let task = tokio::spawn(async move {
            if let Err(error) = axum::serve(listener, app).await {
                tracing::error!(%error, "fixture server exited");
            }
        });

        tracing::debug!(%addr, "fixture server started");
        Ok(Self { addr, task })
    }

    /// The bound socket address.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for Backend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Serve the fixture on the given listener until a shutdown signal.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, state: FixtureState) -> std::io::Result<()> {
    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
