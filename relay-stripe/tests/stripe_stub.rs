//! Adapter tests against an in-process Stripe stand-in.
//!
//! The stub mimics the three Stripe endpoints the relay uses, checks the
//! bearer token and echoes back the form/query parameters it received.

use std::collections::HashMap;

use axum::{
    Form, Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use relay_stripe::StripeProcessor;
use relay_types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, ListPaymentMethodsRequest,
    PaymentProcessor, ProcessorError, SecretKey,
};
use serde_json::json;
use tokio::net::TcpListener;

const KEY: &str = "sk_test_stub";

fn authorized(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {}", KEY);
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": {
                    "message": "Invalid API Key provided",
                    "type": "invalid_request_error"
                }
            })),
        )
            .into_response()),
    }
}

async fn payment_intents(
    headers: HeaderMap,
    Form(params): Form<HashMap<String, String>>,
) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    if params.get("payment_method").map(String::as_str) == Some("pm_card_chargeDeclined") {
        return (
            StatusCode::PAYMENT_REQUIRED,
            Json(json!({
                "error": {
                    "message": "Your card was declined.",
                    "type": "card_error",
                    "code": "card_declined"
                }
            })),
        )
            .into_response();
    }
    Json(json!({
        "id": "pi_stub",
        "object": "payment_intent",
        "status": "succeeded",
        "received": params,
    }))
    .into_response()
}

async fn customers(headers: HeaderMap, Form(params): Form<HashMap<String, String>>) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    Json(json!({
        "id": "cus_stub",
        "object": "customer",
        "email": params.get("email"),
        "received": params,
    }))
    .into_response()
}

async fn payment_methods(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(resp) = authorized(&headers) {
        return resp;
    }
    let customer = params.get("customer").cloned().unwrap_or_default();
    if customer == "cus_999" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": {
                    "message": "No such customer: cus_999",
                    "type": "invalid_request_error",
                    "code": "resource_missing"
                }
            })),
        )
            .into_response();
    }
    if customer == "cus_garbled" {
        return (StatusCode::OK, "not json").into_response();
    }
    Json(json!({
        "object": "list",
        "data": [{
            "id": format!("pm_{}", customer),
            "customer": customer,
            "type": params.get("type"),
        }],
        "has_more": false,
    }))
    .into_response()
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/v1/payment_intents", post(payment_intents))
        .route("/v1/customers", post(customers))
        .route("/v1/payment_methods", get(payment_methods));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn processor() -> StripeProcessor {
    let base = spawn_stub().await;
    StripeProcessor::new(SecretKey::new(KEY).unwrap()).with_base_url(base)
}

#[tokio::test]
async fn test_payment_intent_sends_confirm_parameters() {
    let processor = processor().await;
    let intent = processor
        .create_payment_intent(CreatePaymentIntentRequest {
            amount: 2000,
            currency: "usd".into(),
            payment_method_id: "pm_card_visa".into(),
            customer_id: "cus_1".into(),
        })
        .await
        .unwrap();

    assert_eq!(intent.id(), Some("pi_stub"));
    let received = &intent.0["received"];
    assert_eq!(received["amount"], "2000");
    assert_eq!(received["currency"], "usd");
    assert_eq!(received["payment_method"], "pm_card_visa");
    assert_eq!(received["customer"], "cus_1");
    assert_eq!(received["confirmation_method"], "automatic");
    assert_eq!(received["confirm"], "true");
}

#[tokio::test]
async fn test_declined_card_maps_to_api_error() {
    let processor = processor().await;
    let err = processor
        .create_payment_intent(CreatePaymentIntentRequest {
            amount: 2000,
            currency: "usd".into(),
            payment_method_id: "pm_card_chargeDeclined".into(),
            customer_id: "cus_1".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProcessorError::Api {
            status: 402,
            message: "Your card was declined.".into(),
            kind: Some("card_error".into()),
            code: Some("card_declined".into()),
        }
    );
}

#[tokio::test]
async fn test_customer_sets_default_payment_method() {
    let processor = processor().await;
    let customer = processor
        .create_customer(CreateCustomerRequest {
            email: "a@b.com".into(),
            payment_method_id: "pm_123".into(),
        })
        .await
        .unwrap();

    assert_eq!(customer.id(), Some("cus_stub"));
    let received = &customer.0["received"];
    assert_eq!(received["email"], "a@b.com");
    assert_eq!(received["payment_method"], "pm_123");
    assert_eq!(received["invoice_settings[default_payment_method]"], "pm_123");
}

#[tokio::test]
async fn test_list_returns_card_methods_data() {
    let processor = processor().await;
    let methods = processor
        .list_payment_methods(ListPaymentMethodsRequest {
            customer_id: "cus_42".into(),
        })
        .await
        .unwrap();

    assert_eq!(methods.len(), 1);
    assert_eq!(methods.0[0]["id"], "pm_cus_42");
    assert_eq!(methods.0[0]["type"], "card");
}

#[tokio::test]
async fn test_unknown_customer_message() {
    let processor = processor().await;
    let err = processor
        .list_payment_methods(ListPaymentMethodsRequest {
            customer_id: "cus_999".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "No such customer: cus_999");
}

#[tokio::test]
async fn test_garbled_body_is_decode_error() {
    let processor = processor().await;
    let err = processor
        .list_payment_methods(ListPaymentMethodsRequest {
            customer_id: "cus_garbled".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessorError::Decode(_)));
}

#[tokio::test]
async fn test_wrong_key_is_rejected() {
    let base = spawn_stub().await;
    let processor =
        StripeProcessor::new(SecretKey::new("sk_test_wrong").unwrap()).with_base_url(base);
    let err = processor
        .create_customer(CreateCustomerRequest {
            email: "a@b.com".into(),
            payment_method_id: "pm_123".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessorError::Api { status: 401, .. }));
    assert!(!err.message().contains("sk_test_wrong"));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let processor = StripeProcessor::new(SecretKey::new(KEY).unwrap())
        .with_base_url(format!("http://{}", addr));
    let err = processor
        .list_payment_methods(ListPaymentMethodsRequest {
            customer_id: "cus_1".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessorError::Transport(_)));
    assert!(!err.message().is_empty());
}
