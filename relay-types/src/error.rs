//! Error types for the payment relay.

/// A failed call to the payment processor.
///
/// Every variant reaches the caller the same way: as the `error` message of a
/// failure envelope. The variants only exist so logs can tell them apart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProcessorError {
    /// The processor answered with an error body (declined card, unknown
    /// customer, invalid parameter, ...).
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        kind: Option<String>,
        code: Option<String>,
    },

    /// The request never produced a processor response.
    #[error("{0}")]
    Transport(String),

    /// The processor response could not be decoded.
    #[error("{0}")]
    Decode(String),
}

impl ProcessorError {
    /// Builds an `Api` error with only a status and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ProcessorError::Api {
            status,
            message: message.into(),
            kind: None,
            code: None,
        }
    }

    /// The human-readable message reported to callers.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Payment processor request failed".to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_processor_message() {
        let err = ProcessorError::api(404, "No such customer: cus_999");
        assert_eq!(err.message(), "No such customer: cus_999");
    }

    #[test]
    fn test_empty_message_falls_back() {
        let err = ProcessorError::Transport(String::new());
        assert!(!err.message().is_empty());
    }
}
