use crate::domain::bank::BankRequest;
use crate::domain::payment::{
    Payment, PaymentOutcome, PaymentRequest, PaymentStatus, last_four_digits,
};
use crate::domain::ports::{BankClientRef, PaymentStoreRef};
use crate::error::Result;
use tracing::info;
use uuid::Uuid;

/// Turns a validated payment request into a recorded outcome.
///
/// `PaymentProcessor` forwards the request to the acquiring bank and, when the
/// bank gives a decision, stores the resulting payment under a freshly minted id.
pub struct PaymentProcessor {
    bank: BankClientRef,
    store: PaymentStoreRef,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `bank` - The client used to ask the acquiring bank for a decision.
    /// * `store` - The store processed payments are recorded in.
    pub fn new(bank: BankClientRef, store: PaymentStoreRef) -> Self {
        Self { bank, store }
    }

    /// Processes a request that has already passed validation.
    ///
    /// Without a bank decision the outcome is `Unrecorded` and the store is left
    /// alone. A store failure (a colliding id) is returned as is and not retried.
    pub async fn process(&self, request: &PaymentRequest) -> Result<PaymentOutcome> {
        let bank_request = BankRequest::from(request);

        let Some(decision) = self.bank.send(&bank_request).await else {
            info!("No decision from the acquiring bank, declining without recording");
            return Ok(PaymentOutcome::Unrecorded);
        };

        let payment = Payment {
            id: Uuid::new_v4(),
            status: if decision.authorized {
                PaymentStatus::Authorized
            } else {
                PaymentStatus::Declined
            },
            card_number_last_four: last_four_digits(&request.card_number)?,
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency.clone(),
            amount: request.amount,
        };

        self.store.add(payment.clone()).await?;

        info!(payment_id = %payment.id, status = ?payment.status, "Payment recorded");
        Ok(PaymentOutcome::Recorded(payment))
    }
}
