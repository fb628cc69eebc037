use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("A payment with ID {0} already exists")]
    DuplicatePayment(Uuid),
    #[error("Card number is too short or not numeric, cannot take the last four digits")]
    MalformedCardNumber,
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
