//! # HTTP Server Module
//!
//! Demo server that puts the validator in front of an echo handler.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check (not validated)
//! - `POST /` and `POST /*path` - Validated, echoes the request body back

pub mod config;
pub mod server;

pub use config::ServerConfig;
pub use server::HttpServer;
