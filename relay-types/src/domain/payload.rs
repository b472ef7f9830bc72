//! Opaque processor payloads.
//!
//! The relay never interprets what the processor returns. Each payload wraps
//! the raw JSON so it can be handed back to the caller unmodified.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// A processor payload carried by a successful [`crate::Envelope`].
///
/// `FIELD` is the key the payload is stored under in the response body.
pub trait Payload: Serialize + DeserializeOwned {
    const FIELD: &'static str;
}

/// A processor-side payment intent (an attempted, confirmed charge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentIntent(pub Value);

/// A processor-side customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customer(pub Value);

/// The card payment methods attached to a customer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethodList(pub Vec<Value>);

impl Payload for PaymentIntent {
    const FIELD: &'static str = "paymentIntent";
}

impl Payload for Customer {
    const FIELD: &'static str = "customer";
}

impl Payload for PaymentMethodList {
    const FIELD: &'static str = "paymentMethods";
}

impl PaymentIntent {
    /// Returns the processor id (`pi_...`) if the payload carries one.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }
}

impl Customer {
    /// Returns the processor id (`cus_...`) if the payload carries one.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }
}

impl PaymentMethodList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the ids (`pm_...`) of the listed payment methods.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter_map(|pm| pm.get("id").and_then(Value::as_str))
    }
}
