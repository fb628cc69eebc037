use super::bank::{BankRequest, BankResponse};
use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Inserts a payment. Fails with `DuplicatePayment` if the id is taken,
    /// leaving the existing entry untouched.
    async fn add(&self, payment: Payment) -> Result<()>;
    async fn get(&self, id: Uuid) -> Result<Option<Payment>>;
}

#[async_trait]
pub trait BankClient: Send + Sync {
    /// Makes a single attempt to obtain a decision from the acquiring bank.
    ///
    /// `None` means no decision could be obtained, for whatever reason.
    async fn send(&self, request: &BankRequest) -> Option<BankResponse>;
}

pub type PaymentStoreRef = Arc<dyn PaymentStore>;
pub type BankClientRef = Arc<dyn BankClient>;
