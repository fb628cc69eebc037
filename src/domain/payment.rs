use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The outcome reported to the merchant for a payment attempt.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

/// An inbound card payment as submitted by the merchant.
///
/// Nothing is enforced at deserialization time. Missing fields fall back to
/// their defaults so that they are caught by validation instead of the extractor.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentRequest {
    pub card_number: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub cvv: i64,
}

/// A payment that reached the acquiring bank and was recorded.
///
/// Only the last four digits of the card number are kept.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: u16,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

/// What the processor hands back for a single attempt.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PaymentOutcome {
    /// The bank gave a decision and the payment was stored under its id.
    Recorded(Payment),
    /// The bank could not be reached or did not answer usably.
    /// Reported as declined, never stored, never retrievable.
    Unrecorded,
}

impl PaymentOutcome {
    pub fn status(&self) -> PaymentStatus {
        match self {
            PaymentOutcome::Recorded(payment) => payment.status,
            PaymentOutcome::Unrecorded => PaymentStatus::Declined,
        }
    }

    pub fn payment(&self) -> Option<&Payment> {
        match self {
            PaymentOutcome::Recorded(payment) => Some(payment),
            PaymentOutcome::Unrecorded => None,
        }
    }
}

/// Takes the final four characters of a card number as an integer.
///
/// "1234567890120042" yields 42; leading zeros are not preserved.
pub fn last_four_digits(card_number: &str) -> Result<u16> {
    let start = card_number
        .len()
        .checked_sub(4)
        .ok_or(GatewayError::MalformedCardNumber)?;
    card_number
        .get(start..)
        .filter(|tail| tail.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|tail| tail.parse().ok())
        .ok_or(GatewayError::MalformedCardNumber)
}
