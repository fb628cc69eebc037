use super::payment::PaymentRequest;
use serde::{Deserialize, Serialize};

/// The normalized request forwarded to the acquiring bank.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct BankRequest {
    pub card_number: String,
    /// `MM/YYYY`
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl From<&PaymentRequest> for BankRequest {
    fn from(request: &PaymentRequest) -> Self {
        Self {
            card_number: request.card_number.clone(),
            expiry_date: format!("{:02}/{}", request.expiry_month, request.expiry_year),
            currency: request.currency.clone(),
            amount: request.amount,
            cvv: request.cvv.to_string(),
        }
    }
}

/// The acquiring bank's decision.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct BankResponse {
    pub authorized: bool,
    #[serde(default, alias = "message")]
    pub authorization_code: Option<String>,
}
