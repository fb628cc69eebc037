//! Payment data model, validation rules and the ports the application layer
//! depends on.

pub mod bank;
pub mod payment;
pub mod ports;
pub mod validation;
