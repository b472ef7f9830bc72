//! # Relay Stripe
//!
//! Outbound adapter that implements the `PaymentProcessor` port against
//! Stripe's REST API.
//!
//! Requests are form-encoded and authenticated with the secret key as a
//! bearer token. Each port method is a single HTTP round trip: no retries,
//! no idempotency keys, no client-side timeout beyond reqwest's defaults.

mod wire;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, instrument};

use relay_types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, Customer, ListPaymentMethodsRequest,
    PaymentIntent, PaymentMethodList, PaymentProcessor, ProcessorError, SecretKey,
};

/// Production Stripe API host.
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Stripe-backed payment processor.
pub struct StripeProcessor {
    http: Client,
    base_url: String,
    secret_key: SecretKey,
}

impl StripeProcessor {
    /// Creates a processor talking to the production Stripe API.
    pub fn new(secret_key: SecretKey) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            secret_key,
        }
    }

    /// Points the processor at another host (a local stub or a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_form(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ProcessorError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(self.secret_key.expose())
            .form(params)
            .send()
            .await
            .map_err(|e| ProcessorError::Transport(e.to_string()))?;
        handle_response(resp).await
    }

    async fn get_query(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ProcessorError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(self.secret_key.expose())
            .query(params)
            .send()
            .await
            .map_err(|e| ProcessorError::Transport(e.to_string()))?;
        handle_response(resp).await
    }
}

async fn handle_response(resp: Response) -> Result<Value, ProcessorError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ProcessorError::Transport(e.to_string()))?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(|e| ProcessorError::Decode(e.to_string()));
    }

    match serde_json::from_str::<wire::ErrorBody>(&body) {
        Ok(wire::ErrorBody { error }) => Err(ProcessorError::Api {
            status: status.as_u16(),
            message: error
                .message
                .unwrap_or_else(|| format!("Stripe request failed with HTTP {}", status)),
            kind: error.kind,
            code: error.code,
        }),
        Err(_) => Err(ProcessorError::api(
            status.as_u16(),
            format!("Stripe request failed with HTTP {}", status),
        )),
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    #[instrument(skip(self, req), fields(customer = %req.customer_id, amount = req.amount))]
    async fn create_payment_intent(
        &self,
        req: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, ProcessorError> {
        let params = [
            ("amount", req.amount.to_string()),
            ("currency", req.currency),
            ("payment_method", req.payment_method_id),
            ("customer", req.customer_id),
            ("confirmation_method", "automatic".to_string()),
            ("confirm", "true".to_string()),
        ];
        let intent = self.post_form("/v1/payment_intents", &params).await?;
        debug!(status = ?intent.get("status"), "payment intent created");
        Ok(PaymentIntent(intent))
    }

    #[instrument(skip(self, req))]
    async fn create_customer(
        &self,
        req: CreateCustomerRequest,
    ) -> Result<Customer, ProcessorError> {
        let params = [
            ("email", req.email),
            ("payment_method", req.payment_method_id.clone()),
            (
                "invoice_settings[default_payment_method]",
                req.payment_method_id,
            ),
        ];
        let customer = self.post_form("/v1/customers", &params).await?;
        debug!(id = ?customer.get("id"), "customer created");
        Ok(Customer(customer))
    }

    #[instrument(skip(self, req), fields(customer = %req.customer_id))]
    async fn list_payment_methods(
        &self,
        req: ListPaymentMethodsRequest,
    ) -> Result<PaymentMethodList, ProcessorError> {
        let params = [("customer", req.customer_id), ("type", "card".to_string())];
        let body = self.get_query("/v1/payment_methods", &params).await?;
        let list: wire::List =
            serde_json::from_value(body).map_err(|e| ProcessorError::Decode(e.to_string()))?;
        debug!(
            count = list.data.len(),
            has_more = list.has_more,
            "payment methods listed"
        );
        Ok(PaymentMethodList(list.data))
    }
}
