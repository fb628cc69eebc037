//! Application layer containing the payment orchestration.
//!
//! This module defines the `PaymentProcessor`, which sits between the HTTP
//! interface and the ports: it asks the acquiring bank for a decision and
//! records what came back.

pub mod processor;
