//! Puzzle HTTP server lifecycle management.
//!
//! [`spawn_server`] binds the listener up front, so the caller knows the
//! final address (and that the port is open) before anything is published
//! to the solvers, then serves on a background task until the shutdown
//! future resolves.

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the puzzle server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `127.0.0.1`).
    pub host: String,
    /// The TCP port to listen on. `0` picks a free port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

/// Errors that can occur when starting or running the puzzle server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// A server running on a background task.
#[derive(Debug)]
pub struct RunningServer {
    /// The address the listener is bound to.
    pub addr: SocketAddr,
    /// Resolves when the server stops.
    pub handle: JoinHandle<Result<(), ServerError>>,
}

impl RunningServer {
    /// Base URL clients should use to reach this server.
    pub fn base_url(&self) -> String {
        base_url(self.addr)
    }
}

/// `http://host:port` for a bound address. A wildcard bind address is
/// replaced with loopback so the URL is dialable.
pub fn base_url(addr: SocketAddr) -> String {
    let ip = match addr.ip() {
        ip if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        ip => ip,
    };
    format!("http://{}", SocketAddr::new(ip, addr.port()))
}

/// Bind the listener and start serving on a background task.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address is invalid or cannot be
/// bound. Serving errors surface through [`RunningServer::handle`].
pub async fn spawn_server<F>(
    config: &ServerConfig,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<RunningServer, ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("no local address: {e}")))?;

    let router = build_router(state);
    info!(%addr, "puzzle server listening");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Serve(e.to_string()))?;
        info!(%addr, "puzzle server stopped");
        Ok(())
    });

    Ok(RunningServer { addr, handle })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_address_maps_to_loopback() {
        let addr: SocketAddr = ([0, 0, 0, 0], 8080).into();
        assert_eq!(base_url(addr), "http://127.0.0.1:8080");
    }

    #[test]
    fn concrete_address_is_kept() {
        let addr: SocketAddr = ([10, 1, 2, 3], 9000).into();
        assert_eq!(base_url(addr), "http://10.1.2.3:9000");
    }

    #[test]
    fn error_messages_carry_a_single_prefix() {
        let serve = ServerError::Serve("connection reset".to_owned());
        assert_eq!(serve.to_string(), "serve error: connection reset");
        let bind = ServerError::Bind("address in use".to_owned());
        assert_eq!(bind.to_string(), "bind error: address in use");
    }
}
