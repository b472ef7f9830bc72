//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not concrete processors.

mod processor;

pub use processor::PaymentProcessor;
