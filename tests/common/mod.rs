#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Datelike, Local};
use payment_gateway::domain::bank::{BankRequest, BankResponse};
use payment_gateway::domain::payment::PaymentRequest;
use payment_gateway::domain::ports::BankClient;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Bank client double that always gives the same answer and counts calls.
pub struct StubBank {
    answer: Option<BankResponse>,
    calls: AtomicUsize,
}

impl StubBank {
    fn answering(answer: Option<BankResponse>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn authorizing() -> Arc<Self> {
        Self::answering(Some(BankResponse {
            authorized: true,
            authorization_code: Some("0bb07405-6d44-4b50-a14f-7ae0beff13ad".to_string()),
        }))
    }

    pub fn declining() -> Arc<Self> {
        Self::answering(Some(BankResponse {
            authorized: false,
            authorization_code: None,
        }))
    }

    /// Behaves like a bank that is down or answering with an error status.
    pub fn unreachable() -> Arc<Self> {
        Self::answering(None)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BankClient for StubBank {
    async fn send(&self, _request: &BankRequest) -> Option<BankResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

/// A request that passes validation whenever the tests run.
pub fn valid_request() -> PaymentRequest {
    PaymentRequest {
        card_number: "2222405343248877".to_string(),
        expiry_month: 4,
        expiry_year: Local::now().year() + 1,
        currency: "GBP".to_string(),
        amount: 100,
        cvv: 123,
    }
}

/// The request used by the processing scenarios. Its expiry is in the past,
/// which does not matter because the processor does not validate.
pub fn scenario_request() -> PaymentRequest {
    PaymentRequest {
        card_number: "1234567890123456".to_string(),
        expiry_month: 12,
        expiry_year: 2025,
        currency: "GBP".to_string(),
        amount: 1000,
        cvv: 123,
    }
}
