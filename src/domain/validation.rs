//! Request validation.
//!
//! Every rule is checked independently and all violations are collected, so a
//! single pass yields the full list of field errors. What the caller does with
//! that list (the HTTP layer only answers `Rejected`) is not decided here.

use super::payment::PaymentRequest;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

pub const INVALID_CARD_NUMBER: &str = "Invalid card number";
pub const INVALID_EXPIRY_MONTH: &str = "Invalid expiry month";
pub const CARD_EXPIRED: &str = "Card has expired";
pub const INVALID_CURRENCY: &str = "Invalid currency";
pub const INVALID_AMOUNT: &str = "Invalid amount";
pub const INVALID_CVV: &str = "Invalid CVV";

static CARD_NUMBER_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{14,19}$").ok());
static CVV_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").ok());

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Field {
    CardNumber,
    ExpiryMonth,
    ExpiryYear,
    Currency,
    Amount,
    Cvv,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::CardNumber => "cardNumber",
            Field::ExpiryMonth => "expiryMonth",
            Field::ExpiryYear => "expiryYear",
            Field::Currency => "currency",
            Field::Amount => "amount",
            Field::Cvv => "cvv",
        };
        f.write_str(name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates a request against today's local calendar date.
pub fn validate(request: &PaymentRequest) -> Vec<FieldError> {
    validate_at(request, Local::now().date_naive())
}

/// Validates a request as if `today` were the current date.
///
/// An empty result means the request may be forwarded to the bank.
pub fn validate_at(request: &PaymentRequest, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !matches_pattern(&CARD_NUMBER_REGEX, &request.card_number) {
        errors.push(FieldError::new(Field::CardNumber, INVALID_CARD_NUMBER));
    }

    if !(1..=12).contains(&request.expiry_month) {
        errors.push(FieldError::new(Field::ExpiryMonth, INVALID_EXPIRY_MONTH));
    }

    if !expires_after(request.expiry_month, request.expiry_year, today) {
        errors.push(FieldError::new(Field::ExpiryMonth, CARD_EXPIRED));
        errors.push(FieldError::new(Field::ExpiryYear, CARD_EXPIRED));
    }

    if !SUPPORTED_CURRENCIES.contains(&request.currency.as_str()) {
        errors.push(FieldError::new(Field::Currency, INVALID_CURRENCY));
    }

    if request.amount <= 0 {
        errors.push(FieldError::new(Field::Amount, INVALID_AMOUNT));
    }

    if !matches_pattern(&CVV_REGEX, &request.cvv.to_string()) {
        errors.push(FieldError::new(Field::Cvv, INVALID_CVV));
    }

    errors
}

// The current month counts as expired.
fn expires_after(month: i32, year: i32, today: NaiveDate) -> bool {
    let current_month = today.month() as i32;
    year > today.year() || (year == today.year() && month > current_month)
}

fn matches_pattern(regex: &LazyLock<Option<Regex>>, value: &str) -> bool {
    regex
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn valid_request() -> PaymentRequest {
        PaymentRequest {
            card_number: "1234567890123456".to_string(),
            expiry_month: 12,
            expiry_year: 2027,
            currency: "USD".to_string(),
            amount: 1000,
            cvv: 123,
        }
    }

    fn messages_for(errors: &[FieldError], field: Field) -> Vec<&'static str> {
        errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        assert!(validate_at(&valid_request(), today()).is_empty());
    }

    #[test]
    fn test_card_number_rules() {
        for card_number in [
            "",
            "123",
            "1234567890123",
            "12345678901234567890",
            "1234abcd5678efgh",
            "1234 5678 9012 3456",
        ] {
            let request = PaymentRequest {
                card_number: card_number.to_string(),
                ..valid_request()
            };
            let errors = validate_at(&request, today());
            assert_eq!(
                errors,
                vec![FieldError::new(Field::CardNumber, INVALID_CARD_NUMBER)],
                "card number {card_number:?}"
            );
        }

        for card_number in ["12345678901234", "1234567890123456789"] {
            let request = PaymentRequest {
                card_number: card_number.to_string(),
                ..valid_request()
            };
            assert!(validate_at(&request, today()).is_empty());
        }
    }

    #[test]
    fn test_expiry_month_out_of_range() {
        for month in [0, 13, -1] {
            let request = PaymentRequest {
                expiry_month: month,
                ..valid_request()
            };
            let errors = validate_at(&request, today());
            assert_eq!(
                messages_for(&errors, Field::ExpiryMonth),
                vec![INVALID_EXPIRY_MONTH]
            );
        }
    }

    #[test]
    fn test_current_month_is_expired() {
        let request = PaymentRequest {
            expiry_month: 6,
            expiry_year: 2026,
            ..valid_request()
        };
        let errors = validate_at(&request, today());

        assert_eq!(messages_for(&errors, Field::ExpiryMonth), vec![CARD_EXPIRED]);
        assert_eq!(messages_for(&errors, Field::ExpiryYear), vec![CARD_EXPIRED]);
    }

    #[test]
    fn test_past_year_is_expired_and_next_month_is_not() {
        let past = PaymentRequest {
            expiry_month: 12,
            expiry_year: 2025,
            ..valid_request()
        };
        assert_eq!(validate_at(&past, today()).len(), 2);

        let next_month = PaymentRequest {
            expiry_month: 7,
            expiry_year: 2026,
            ..valid_request()
        };
        assert!(validate_at(&next_month, today()).is_empty());
    }

    #[test]
    fn test_currency_is_case_sensitive() {
        for currency in ["usd", "ABC", "", "GBPX"] {
            let request = PaymentRequest {
                currency: currency.to_string(),
                ..valid_request()
            };
            assert_eq!(
                validate_at(&request, today()),
                vec![FieldError::new(Field::Currency, INVALID_CURRENCY)]
            );
        }
    }

    #[test]
    fn test_amount_must_be_positive() {
        for amount in [0, -1] {
            let request = PaymentRequest {
                amount,
                ..valid_request()
            };
            assert_eq!(
                validate_at(&request, today()),
                vec![FieldError::new(Field::Amount, INVALID_AMOUNT)]
            );
        }
    }

    #[test]
    fn test_cvv_rules() {
        for cvv in [0, 12, 12345, -123] {
            let request = PaymentRequest {
                cvv,
                ..valid_request()
            };
            assert_eq!(
                validate_at(&request, today()),
                vec![FieldError::new(Field::Cvv, INVALID_CVV)]
            );
        }
        let four_digits = PaymentRequest {
            cvv: 1234,
            ..valid_request()
        };
        assert!(validate_at(&four_digits, today()).is_empty());
    }

    #[test]
    fn test_all_violations_are_collected() {
        let request = PaymentRequest {
            card_number: "123".to_string(),
            expiry_month: 13,
            expiry_year: 2020,
            currency: "INVALID".to_string(),
            amount: 0,
            cvv: 12345,
        };
        let errors = validate_at(&request, today());

        assert_eq!(errors.len(), 7);
        assert_eq!(
            messages_for(&errors, Field::ExpiryMonth),
            vec![INVALID_EXPIRY_MONTH, CARD_EXPIRED]
        );
        assert_eq!(validate_at(&request, today()), errors);
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError::new(Field::Cvv, INVALID_CVV);
        assert_eq!(error.to_string(), "cvv: Invalid CVV");
    }
}
