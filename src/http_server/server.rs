//! # HTTP Server
//!
//! Serves an echo endpoint behind the validator. The echo handler returns
//! exactly the bytes it reads, which makes body replay observable.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::middleware::JsonBodyValidatorLayer;

use super::config::ServerConfig;

/// Demo HTTP server
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server that validates with `validator`
    pub fn new(config: ServerConfig, validator: JsonBodyValidatorLayer) -> Self {
        let router = Self::build_router(validator);
        Self { config, router }
    }

    /// Build the router: validated echo routes, then the unvalidated health check
    fn build_router(validator: JsonBodyValidatorLayer) -> Router {
        Router::new()
            .route("/", post(echo))
            .route("/*path", post(echo))
            // Only wraps the routes registered above
            .route_layer(validator)
            .route("/health", get(health))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "json body validator listening");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn echo(body: Bytes) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
