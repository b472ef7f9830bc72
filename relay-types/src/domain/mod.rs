//! Domain models for the payment relay.

pub mod payload;
pub mod secret;

pub use payload::{Customer, Payload, PaymentIntent, PaymentMethodList};
pub use secret::SecretKey;
