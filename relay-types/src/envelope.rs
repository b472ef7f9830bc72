//! Response envelope.
//!
//! Every relay endpoint answers with one of two body shapes:
//!
//! ```text
//! {"success": true,  "<field>": <payload>}
//! {"success": false, "error": "<message>"}
//! ```
//!
//! where `<field>` is [`Payload::FIELD`] of the payload type.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::Payload;
use crate::error::ProcessorError;

/// Message used when a failure body carries no usable `error` text.
pub const UNSPECIFIED_FAILURE: &str = "Relay reported failure without an error message";

/// Outcome of a relayed call, as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure(String),
}

impl<T> Envelope<T> {
    /// Builds a failure envelope from any error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Envelope::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    /// Returns the error message of a failure envelope.
    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(msg) => Some(msg),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Envelope::Success(payload) => Ok(payload),
            Envelope::Failure(msg) => Err(msg),
        }
    }
}

impl<T> From<Result<T, ProcessorError>> for Envelope<T> {
    fn from(result: Result<T, ProcessorError>) -> Self {
        match result {
            Ok(payload) => Envelope::Success(payload),
            Err(err) => Envelope::Failure(err.message()),
        }
    }
}

impl<T: Payload> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Envelope::Success(payload) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry(T::FIELD, payload)?;
            }
            Envelope::Failure(msg) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", msg)?;
            }
        }
        map.end()
    }
}

impl<'de, T: Payload + DeserializeOwned> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;

        let success = map
            .get("success")
            .and_then(Value::as_bool)
            .ok_or_else(|| D::Error::missing_field("success"))?;

        if success {
            let payload = map
                .remove(T::FIELD)
                .ok_or_else(|| D::Error::missing_field(T::FIELD))?;
            T::deserialize(payload)
                .map(Envelope::Success)
                .map_err(D::Error::custom)
        } else {
            let msg = match map.remove("error") {
                Some(Value::String(msg)) if !msg.trim().is_empty() => msg,
                Some(Value::String(_)) | Some(Value::Null) | None => {
                    UNSPECIFIED_FAILURE.to_string()
                }
                Some(other) => other.to_string(),
            };
            Ok(Envelope::Failure(msg))
        }
    }
}
