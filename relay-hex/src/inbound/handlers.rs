//! HTTP request handlers.
//!
//! Relay handlers always answer `200 OK`. Success or failure is carried by the
//! `success` flag of the body, including for bodies that fail to parse.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use relay_types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, Customer, Envelope,
    ListPaymentMethodsRequest, PaymentIntent, PaymentMethodList, PaymentProcessor,
};

use crate::RelayService;

/// Application state shared across handlers.
pub struct AppState<P: PaymentProcessor> {
    pub service: RelayService<P>,
}

/// Unwraps a JSON body, turning a rejection into the failure message.
///
/// Bodies that are not JSON, miss a field, or carry a wrong type never reach
/// the processor.
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, String> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            let message = rejection.body_text();
            tracing::warn!(status = %rejection.status(), error = %message, "rejected request body");
            Err(message)
        }
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create and confirm a payment intent.
#[tracing::instrument(skip(state, payload))]
pub async fn create_payment_intent<P: PaymentProcessor>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<CreatePaymentIntentRequest>, JsonRejection>,
) -> Json<Envelope<PaymentIntent>> {
    let req = match parse_body(payload) {
        Ok(req) => req,
        Err(msg) => return Json(Envelope::Failure(msg)),
    };
    tracing::info!(
        customer = %req.customer_id,
        amount = req.amount,
        currency = %req.currency,
        "relaying payment intent"
    );
    Json(state.service.create_payment_intent(req).await)
}

/// Create a customer with a default payment method.
#[tracing::instrument(skip(state, payload))]
pub async fn create_customer<P: PaymentProcessor>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Json<Envelope<Customer>> {
    let req = match parse_body(payload) {
        Ok(req) => req,
        Err(msg) => return Json(Envelope::Failure(msg)),
    };
    tracing::info!(payment_method = %req.payment_method_id, "relaying customer creation");
    Json(state.service.create_customer(req).await)
}

/// List a customer's saved card payment methods.
#[tracing::instrument(skip(state, payload))]
pub async fn list_payment_methods<P: PaymentProcessor>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<ListPaymentMethodsRequest>, JsonRejection>,
) -> Json<Envelope<PaymentMethodList>> {
    let req = match parse_body(payload) {
        Ok(req) => req,
        Err(msg) => return Json(Envelope::Failure(msg)),
    };
    tracing::info!(customer = %req.customer_id, "relaying payment method listing");
    Json(state.service.list_payment_methods(req).await)
}
