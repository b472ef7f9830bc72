//! # Relay Hex
//!
//! Application service layer and HTTP adapter for the payment relay.
//!
//! ## Architecture
//!
//! - `service/` - Relay service (one processor call per operation)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document for the relay endpoints
//!
//! The service is generic over `P: PaymentProcessor`, allowing
//! different processor implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::RelayService;
