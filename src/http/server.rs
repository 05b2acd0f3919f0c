//! HTTP server setup and the accept loop.
//!
//! # Responsibilities
//! - Create the Axum Router with the receive and status handlers
//! - Accept connections one at a time and serve each to completion
//! - Stop on the shutdown signal
//!
//! # Design Decisions
//! - No TraceLayer: the receipt dump is the request log
//! - Keep-alive is off so one client cannot hold the loop between requests
//! - No server-side timeouts

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::ConnectInfo, http::Request, routing::get, Router};
use hyper::{body::Incoming, server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;
use tower::ServiceExt;

use crate::config::ReceiverConfig;
use crate::http::handlers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ReceiverConfig>,
}

/// Build the router. Both GET and POST are accepted on every path.
pub fn build_router(config: Arc<ReceiverConfig>) -> Router {
    let state = AppState { config };
    Router::new()
        .route("/", get(handlers::status).post(handlers::receive))
        .route("/{*path}", get(handlers::status).post(handlers::receive))
        .with_state(state)
}

/// Sequential HTTP/1.1 receiver.
pub struct HttpServer {
    router: Router,
    config: Arc<ReceiverConfig>,
}

impl HttpServer {
    pub fn new(config: ReceiverConfig) -> Self {
        let config = Arc::new(config);
        let router = build_router(config.clone());
        Self { router, config }
    }

    /// Run until `shutdown` fires, accepting connections on the given listener.
    ///
    /// A connection still being served when shutdown fires is dropped.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        loop {
            let (stream, peer) = tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to accept connection");
                        continue;
                    }
                },
                _ = shutdown.recv() => break,
            };

            tracing::debug!(peer_addr = %peer, "Connection accepted");

            tokio::select! {
                _ = self.serve_connection(stream, peer) => {}
                _ = shutdown.recv() => {
                    tracing::info!(peer_addr = %peer, "Dropping in-flight connection on shutdown");
                    break;
                }
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    async fn serve_connection(&self, stream: TcpStream, peer: SocketAddr) {
        let app = self.router.clone();
        let service = service_fn(move |mut request: Request<Incoming>| {
            request.extensions_mut().insert(ConnectInfo(peer));
            app.clone().oneshot(request)
        });

        if let Err(e) = http1::Builder::new()
            .keep_alive(false)
            .serve_connection(TokioIo::new(stream), service)
            .await
        {
            tracing::warn!(peer_addr = %peer, error = %e, "Connection error");
        }
    }

    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }
}
