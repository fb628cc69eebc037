//! Adapters implementing the domain ports.

pub mod acquiring_bank;
pub mod in_memory;
