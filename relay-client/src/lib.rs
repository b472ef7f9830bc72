//! # Relay Client SDK
//!
//! A typed Rust client for the payment relay.
//!
//! Relay calls return an [`Envelope`]: a processor-level failure is a normal
//! `Ok(Envelope::Failure(..))`, while `Err(ClientError)` means the relay itself
//! could not be reached or answered something unexpected.

use relay_types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, Customer, Envelope,
    ListPaymentMethodsRequest, PaymentIntent, PaymentMethodList,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Payment relay client.
pub struct RelayClient {
    base_url: String,
    http: Client,
}

impl RelayClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the relay is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Creates and confirms a payment intent.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
        payment_method_id: &str,
        customer_id: &str,
    ) -> Result<Envelope<PaymentIntent>, ClientError> {
        let req = CreatePaymentIntentRequest {
            amount,
            currency: currency.to_string(),
            payment_method_id: payment_method_id.to_string(),
            customer_id: customer_id.to_string(),
        };
        self.post("/create-payment-intent", &req).await
    }

    /// Creates a customer with a default payment method.
    pub async fn create_customer(
        &self,
        email: &str,
        payment_method_id: &str,
    ) -> Result<Envelope<Customer>, ClientError> {
        let req = CreateCustomerRequest {
            email: email.to_string(),
            payment_method_id: payment_method_id.to_string(),
        };
        self.post("/create-customer", &req).await
    }

    /// Lists a customer's saved card payment methods.
    pub async fn list_payment_methods(
        &self,
        customer_id: &str,
    ) -> Result<Envelope<PaymentMethodList>, ClientError> {
        let req = ListPaymentMethodsRequest {
            customer_id: customer_id.to_string(),
        };
        self.post("/list-payment-methods", &req).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
