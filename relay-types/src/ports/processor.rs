//! Payment processor port trait.
//!
//! The Stripe adapter implements this; tests implement it in memory.

use crate::domain::{Customer, PaymentIntent, PaymentMethodList};
use crate::dto::{CreateCustomerRequest, CreatePaymentIntentRequest, ListPaymentMethodsRequest};
use crate::error::ProcessorError;

/// The single outbound collaborator of the relay.
///
/// Each method is exactly one round trip to the processor. Implementations
/// must not retry and must not hold per-request state.
#[async_trait::async_trait]
pub trait PaymentProcessor: Send + Sync + 'static {
    /// Creates a payment intent and confirms it immediately.
    async fn create_payment_intent(
        &self,
        req: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, ProcessorError>;

    /// Creates a customer whose default invoice payment method is `req.payment_method_id`.
    async fn create_customer(&self, req: CreateCustomerRequest)
    -> Result<Customer, ProcessorError>;

    /// Lists the customer's payment methods of type `card`.
    async fn list_payment_methods(
        &self,
        req: ListPaymentMethodsRequest,
    ) -> Result<PaymentMethodList, ProcessorError>;
}
