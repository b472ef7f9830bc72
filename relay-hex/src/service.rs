//! Relay Application Service
//!
//! Forwards each operation to the processor port and folds the outcome into
//! a response envelope. Contains NO infrastructure logic.

use relay_types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, Customer, Envelope,
    ListPaymentMethodsRequest, PaymentIntent, PaymentMethodList, PaymentProcessor, ProcessorError,
};

/// Application service for relayed payment operations.
///
/// Generic over `P: PaymentProcessor` - the processor is injected at
/// construction. The service itself holds no mutable state, so concurrent
/// calls never interact.
pub struct RelayService<P: PaymentProcessor> {
    processor: P,
}

impl<P: PaymentProcessor> RelayService<P> {
    /// Creates a new relay service around the given processor.
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    /// Returns a reference to the underlying processor.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Creates and confirms a payment intent.
    pub async fn create_payment_intent(
        &self,
        req: CreatePaymentIntentRequest,
    ) -> Envelope<PaymentIntent> {
        let result = self.processor.create_payment_intent(req).await;
        report("create_payment_intent", result)
    }

    /// Creates a customer with a default payment method.
    pub async fn create_customer(&self, req: CreateCustomerRequest) -> Envelope<Customer> {
        let result = self.processor.create_customer(req).await;
        report("create_customer", result)
    }

    /// Lists a customer's card payment methods.
    pub async fn list_payment_methods(
        &self,
        req: ListPaymentMethodsRequest,
    ) -> Envelope<PaymentMethodList> {
        let result = self.processor.list_payment_methods(req).await;
        report("list_payment_methods", result)
    }
}

fn report<T>(operation: &'static str, result: Result<T, ProcessorError>) -> Envelope<T> {
    if let Err(err) = &result {
        match err {
            ProcessorError::Api {
                status, kind, code, ..
            } => tracing::warn!(
                operation,
                status,
                kind = kind.as_deref().unwrap_or("-"),
                code = code.as_deref().unwrap_or("-"),
                error = %err,
                "processor rejected request"
            ),
            ProcessorError::Transport(_) | ProcessorError::Decode(_) => {
                tracing::error!(operation, error = %err, "processor call failed")
            }
        }
    }
    Envelope::from(result)
}
