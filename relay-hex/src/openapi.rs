//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use relay_types::dto::{
    CreateCustomerRequest, CreatePaymentIntentRequest, ListPaymentMethodsRequest,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Create and confirm a payment intent
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = "relay",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "Processor outcome; inspect `success`", body = inline(serde_json::Value),
            example = json!({"success": true, "paymentIntent": {"id": "pi_3MtwBwLkdIwHu7ix28a3tqPa", "status": "succeeded"}}))
    )
)]
async fn create_payment_intent() {}

/// Create a customer with a default payment method
#[utoipa::path(
    post,
    path = "/create-customer",
    tag = "relay",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Processor outcome; inspect `success`", body = inline(serde_json::Value),
            example = json!({"success": true, "customer": {"id": "cus_NffrFeUfNV2Hib", "email": "a@b.com"}}))
    )
)]
async fn create_customer() {}

/// List a customer's saved card payment methods
#[utoipa::path(
    post,
    path = "/list-payment-methods",
    tag = "relay",
    request_body = ListPaymentMethodsRequest,
    responses(
        (status = 200, description = "Processor outcome; inspect `success`", body = inline(serde_json::Value),
            example = json!({"success": false, "error": "No such customer: cus_999"}))
    )
)]
async fn list_payment_methods() {}

/// OpenAPI documentation for the payment relay.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Relay API",
        version = "1.0.0",
        description = "Forwards payment intents, customer creation and payment method listing to Stripe.\n\n## Responses\n\nEvery relay endpoint answers `200 OK`. Check the `success` field: `true` carries the processor payload, `false` carries an `error` message.",
        license(name = "MIT"),
    ),
    paths(
        health,
        create_payment_intent,
        create_customer,
        list_payment_methods,
    ),
    components(
        schemas(
            CreatePaymentIntentRequest,
            CreateCustomerRequest,
            ListPaymentMethodsRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "relay", description = "Operations forwarded to the payment processor"),
    )
)]
pub struct ApiDoc;
