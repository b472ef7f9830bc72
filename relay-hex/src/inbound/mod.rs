//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the relay service.

mod handlers;
mod server;

pub use server::HttpServer;
