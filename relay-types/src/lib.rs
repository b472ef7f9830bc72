//! # Relay Types
//!
//! Data structures and port traits for the payment relay.
//! This crate has no IO dependencies - only payload types, the response
//! envelope, error types and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Opaque processor payloads and the processor secret key
//! - `ports/` - Trait definitions that processor adapters implement
//! - `dto/` - Inbound request bodies
//! - `envelope/` - The `{success, ...}` response body shape
//! - `error/` - Processor error type

pub mod domain;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Customer, Payload, PaymentIntent, PaymentMethodList, SecretKey};
pub use dto::*;
pub use envelope::Envelope;
pub use error::ProcessorError;
pub use ports::PaymentProcessor;
