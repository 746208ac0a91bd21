//! In-memory retail banking core: accounts, PIN-gated sessions, deposits, withdrawals,
//! transfers and an administrative console, all driven through structured calls.

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod bank;
pub mod config;
pub mod csv;
pub mod dispense;
pub mod engine;
pub mod errors;
pub mod index;
pub mod session;

/// Account identifier. Unique, assigned monotonically and never reused.
pub type AccountNumber = u32;
