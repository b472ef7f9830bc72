//! Data Transfer Objects (DTOs) for inbound requests.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create and immediately confirm a payment intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Amount in the smallest currency unit (e.g., cents)
    #[schema(example = 2000)]
    pub amount: i64,
    /// Three-letter ISO currency code, lowercase as the processor expects
    #[schema(example = "usd")]
    pub currency: String,
    /// Payment method to charge
    #[schema(example = "pm_card_visa")]
    pub payment_method_id: String,
    /// Customer the payment method belongs to
    #[schema(example = "cus_NffrFeUfNV2Hib")]
    pub customer_id: String,
}

/// Request to create a customer with a default payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[schema(example = "a@b.com")]
    pub email: String,
    /// Payment method to attach and use as the invoice default
    #[schema(example = "pm_123")]
    pub payment_method_id: String,
}

/// Request to list a customer's saved card payment methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPaymentMethodsRequest {
    #[schema(example = "cus_999")]
    pub customer_id: String,
}
